use support_models::notification::Notification;

/// Presents transient messages to the user.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Shows the notification. Never blocks and never fails; a notification
    /// nobody is listening for is dropped.
    fn notify(&self, notification: Notification);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_notify(mut self, notification: Notification) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_const(());
        self
    }
}
