use support_models::notification::Notification;
use support_notification_impl::NotificationReceiver;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes every received notification to `output` until all senders are
/// gone.
pub async fn present(
    mut notifications: NotificationReceiver,
    mut output: impl AsyncWrite + Unpin,
) -> std::io::Result<()> {
    while let Some(notification) = notifications.recv().await {
        output
            .write_all(format!("{}\n", render(&notification)).as_bytes())
            .await?;
        output.flush().await?;
    }
    Ok(())
}

pub fn render(notification: &Notification) -> String {
    let icon = if notification.is_destructive() {
        '\u{2718}'
    } else {
        '\u{2714}'
    };
    format!("{icon} {}: {}", notification.title, notification.description)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use support_notification_contracts::NotificationService;
    use support_notification_impl::ChannelNotificationServiceImpl;

    use super::*;

    #[test]
    fn render_success() {
        assert_eq!(
            render(&Notification::submitted()),
            "\u{2714} Success!: Your support request has been submitted successfully."
        );
    }

    #[test]
    fn render_error() {
        assert_eq!(
            render(&Notification::submission_failed()),
            "\u{2718} Error: There was a problem submitting your request."
        );
    }

    #[tokio::test]
    async fn present_until_closed() {
        // Arrange
        let (notification, receiver) = ChannelNotificationServiceImpl::new();
        notification.notify(Notification::submission_failed());
        notification.notify(Notification::submitted());
        drop(notification);

        let mut output = Vec::new();

        // Act
        present(receiver, &mut output).await.unwrap();

        // Assert
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\u{2718} Error: There was a problem submitting your request.\n\
             \u{2714} Success!: Your support request has been submitted successfully.\n"
        );
    }
}
