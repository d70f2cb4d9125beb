use serde::{Deserialize, Serialize};

/// A transient message reporting the outcome of an action to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl Notification {
    pub fn submitted() -> Self {
        Self {
            title: "Success!".into(),
            description: "Your support request has been submitted successfully.".into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn submission_failed() -> Self {
        Self {
            title: "Error".into(),
            description: "There was a problem submitting your request.".into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_variant() {
        let value = serde_json::to_value(Notification::submission_failed()).unwrap();

        assert_eq!(value["title"], "Error");
        assert_eq!(value["variant"], "destructive");
    }
}
