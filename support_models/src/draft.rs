use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    attachment::Attachment,
    request::{
        CountryCode, RequestType, SupportRequest, SupportRequestBriefDescription,
        SupportRequestContact, SupportRequestDetailedDescription, SupportRequestEmail,
        SupportRequestFullName, SupportRequestPhone, EMAIL_REGEX,
    },
};

/// The text inputs of the support form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Email,
    Phone,
    RequestType,
    BriefDescription,
    DetailedDescription,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::RequestType,
        Self::BriefDescription,
        Self::DetailedDescription,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::RequestType => "Request type",
            Self::BriefDescription => "How can we help?",
            Self::DetailedDescription => "Tell us everything about your problem",
        }
    }

    /// Rules checked on submit, in order. The first failing rule determines
    /// the error message of the field.
    fn rules(self) -> &'static [FieldRule] {
        const FULL_NAME: &[FieldRule] = &[FieldRule::required("Full name is required")];
        const EMAIL: &[FieldRule] = &[
            FieldRule::required("Email is required"),
            FieldRule::new(is_email, "Invalid email address"),
        ];
        const PHONE: &[FieldRule] = &[FieldRule::required("Phone number is required")];
        const REQUEST_TYPE: &[FieldRule] = &[
            FieldRule::required("Request type is required"),
            FieldRule::new(is_request_type, "Invalid request type"),
        ];
        const BRIEF_DESCRIPTION: &[FieldRule] =
            &[FieldRule::required("Brief description is required")];
        const DETAILED_DESCRIPTION: &[FieldRule] =
            &[FieldRule::required("Detailed description is required")];

        match self {
            Self::FullName => FULL_NAME,
            Self::Email => EMAIL,
            Self::Phone => PHONE,
            Self::RequestType => REQUEST_TYPE,
            Self::BriefDescription => BRIEF_DESCRIPTION,
            Self::DetailedDescription => DETAILED_DESCRIPTION,
        }
    }

    /// Returns the message of the first rule `value` violates.
    pub fn check(self, value: &str) -> Option<&'static str> {
        self.rules()
            .iter()
            .find(|rule| !(rule.check)(value))
            .map(|rule| rule.message)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct FieldRule {
    check: fn(&str) -> bool,
    message: &'static str,
}

impl FieldRule {
    const fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }

    const fn required(message: &'static str) -> Self {
        Self::new(is_present, message)
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

fn is_request_type(value: &str) -> bool {
    value.parse::<RequestType>().is_ok()
}

/// The values currently entered into the form. Nothing is validated until
/// the draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub full_name: String,
    pub email: String,
    pub country_code: CountryCode,
    pub phone: String,
    pub request_type: String,
    pub brief_description: String,
    pub detailed_description: String,
}

impl SubmissionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::RequestType => &self.request_type,
            FormField::BriefDescription => &self.brief_description,
            FormField::DetailedDescription => &self.detailed_description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::RequestType => &mut self.request_type,
            FormField::BriefDescription => &mut self.brief_description,
            FormField::DetailedDescription => &mut self.detailed_description,
        };
        *slot = value;
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Runs the rules of every field against the current values.
    pub fn errors(&self) -> FieldErrors {
        FormField::ALL
            .into_iter()
            .filter_map(|field| field.check(self.get(field)).map(|message| (field, message)))
            .collect()
    }

    /// Validates the draft and converts it into a [`SupportRequest`] carrying
    /// the given attachment.
    pub fn validate(&self, attachment: Option<Attachment>) -> Result<SupportRequest, FieldErrors> {
        let errors = self.errors();

        let full_name = SupportRequestFullName::try_new(self.full_name.as_str()).ok();
        let email = SupportRequestEmail::try_new(self.email.as_str()).ok();
        let phone = SupportRequestPhone::try_new(self.phone.as_str()).ok();
        let request_type = self.request_type.parse::<RequestType>().ok();
        let brief_description =
            SupportRequestBriefDescription::try_new(self.brief_description.as_str()).ok();
        let detailed_description =
            SupportRequestDetailedDescription::try_new(self.detailed_description.as_str()).ok();

        match (
            full_name,
            email,
            phone,
            request_type,
            brief_description,
            detailed_description,
        ) {
            (
                Some(full_name),
                Some(email),
                Some(phone),
                Some(request_type),
                Some(brief_description),
                Some(detailed_description),
            ) if errors.is_empty() => Ok(SupportRequest {
                contact: SupportRequestContact {
                    full_name,
                    email,
                    country_code: self.country_code,
                    phone,
                },
                request_type,
                brief_description,
                detailed_description,
                attachment,
            }),
            _ => Err(errors),
        }
    }
}

/// Validation error messages keyed by the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(&field, &message)| (field, message))
    }
}

impl FromIterator<(FormField, &'static str)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, &'static str)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}
