use support_config::Config;
use support_core_form_impl::SupportFormServiceImpl;
use support_notification_impl::{ChannelNotificationServiceImpl, NotificationReceiver};
use support_submission_impl::{SimulatedSubmissionConfig, SimulatedSubmissionServiceImpl};

pub type Submission = SimulatedSubmissionServiceImpl;
pub type Notification = ChannelNotificationServiceImpl;
pub type SupportForm = SupportFormServiceImpl<Submission, Notification>;

/// A fully wired support form together with the receiving end of its
/// notifications.
pub struct Environment {
    pub form: SupportForm,
    pub notifications: NotificationReceiver,
}

impl Environment {
    pub fn new(config: &Config) -> Self {
        let submission = SimulatedSubmissionServiceImpl::new(SimulatedSubmissionConfig {
            delay: config.submission.delay.into(),
        });
        let (notification, notifications) = ChannelNotificationServiceImpl::new();

        Self {
            form: SupportFormServiceImpl::new(submission, notification),
            notifications,
        }
    }
}
