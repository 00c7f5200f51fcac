//! Contact form data model.
//!
//! This module contains the record collected by the form along with the
//! enumerated choices it offers and the identifiers of its validated fields.

use serde::{Deserialize, Serialize};

/// Specifying the validated text fields in canonical order.
///
/// The derived ordering is the order used to pick the first invalid field and
/// to list errors, so variants must stay in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    /// Return the human-readable label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Return the noun used when a value has the wrong shape.
    ///
    pub fn format_noun(&self) -> &'static str {
        match self {
            Field::Email => "email address",
            Field::Phone => "phone number",
            _ => "value",
        }
    }
}

/// Specifying the preferred way to be contacted.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Either,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Either,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Either => "either",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Either => "Either",
        }
    }
}

/// Specifying how urgent the enquiry is.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Low,
        Urgency::Medium,
        Urgency::High,
        Urgency::Urgent,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Urgent => "Urgent",
        }
    }

    /// Parse the value committed by a dropdown back into an urgency.
    ///
    pub fn from_value(value: &str) -> Option<Urgency> {
        Urgency::ALL.into_iter().find(|u| u.value() == value)
    }
}

/// Values collected by the contact form.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
    pub contact_method: ContactMethod,
    pub urgency: Urgency,
}

impl FormData {
    /// Return the raw value of a text field.
    ///
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}
