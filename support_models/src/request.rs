use std::{fmt, str::FromStr, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attachment::Attachment;

/// A validated support request, ready to be handed to the submission backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportRequest {
    pub contact: SupportRequestContact,
    pub request_type: RequestType,
    pub brief_description: SupportRequestBriefDescription,
    pub detailed_description: SupportRequestDetailedDescription,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportRequestContact {
    pub full_name: SupportRequestFullName,
    pub email: SupportRequestEmail,
    pub country_code: CountryCode,
    pub phone: SupportRequestPhone,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct SupportRequestFullName(String);

#[nutype(
    sanitize(trim),
    validate(regex = EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct SupportRequestEmail(String);

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap()
});

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct SupportRequestPhone(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct SupportRequestBriefDescription(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct SupportRequestDetailedDescription(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    TechnicalIssue,
    AccountAccess,
    BillingQuestion,
    FeatureRequest,
    Other,
}

impl RequestType {
    pub const ALL: [Self; 5] = [
        Self::TechnicalIssue,
        Self::AccountAccess,
        Self::BillingQuestion,
        Self::FeatureRequest,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TechnicalIssue => "Technical Issue",
            Self::AccountAccess => "Account Access",
            Self::BillingQuestion => "Billing Question",
            Self::FeatureRequest => "Feature Request",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown request type: {0:?}")]
pub struct UnknownRequestTypeError(pub String);

impl FromStr for RequestType {
    type Err = UnknownRequestTypeError;

    /// Accepts the display label as well as the underscore-separated key,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|x| {
                x.label().eq_ignore_ascii_case(s)
                    || x.label().replace(' ', "_").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownRequestTypeError(s.into()))
    }
}

/// Country calling code shown next to the phone input. Only one option is
/// offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryCode {
    #[default]
    Us,
}

impl CountryCode {
    pub fn dial_prefix(self) -> &'static str {
        match self {
            Self::Us => "+1",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Us => write!(f, "\u{1f1fa}\u{1f1f8} {}", self.dial_prefix()),
        }
    }
}
