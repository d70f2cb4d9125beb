use support_models::notification::Notification;
use support_notification_contracts::NotificationService;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Emits notifications into a channel consumed by a separate presentation
/// layer.
#[derive(Debug, Clone)]
pub struct ChannelNotificationServiceImpl {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotificationServiceImpl {
    pub fn new() -> (Self, NotificationReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationService for ChannelNotificationServiceImpl {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!(title = %notification.title, description = %notification.description, "notify");
        } else {
            info!(title = %notification.title, description = %notification.description, "notify");
        }

        if let Err(err) = self.sender.send(notification) {
            warn!(title = %err.0.title, "Notification dropped, no presenter is attached");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn delivers_in_order() {
        // Arrange
        let (sut, mut receiver) = ChannelNotificationServiceImpl::new();

        // Act
        sut.notify(Notification::submitted());
        sut.notify(Notification::submission_failed());
        drop(sut);

        // Assert
        assert_eq!(receiver.recv().await, Some(Notification::submitted()));
        assert_eq!(receiver.recv().await, Some(Notification::submission_failed()));
        assert_eq!(receiver.recv().await, None);
    }

    #[test]
    fn receiver_closed() {
        // Arrange
        let (sut, receiver) = ChannelNotificationServiceImpl::new();
        drop(receiver);

        // Act
        sut.notify(Notification::submitted());
    }

    #[tokio::test]
    async fn clones_share_channel() {
        let (sut, mut receiver) = ChannelNotificationServiceImpl::new();
        let other = sut.clone();

        other.notify(Notification::submitted());

        assert_eq!(receiver.recv().await, Some(Notification::submitted()));
    }
}
