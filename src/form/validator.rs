//! Field validation.
//!
//! Validation is a pure pass over [`FormData`] producing an [`ErrorMap`]. The
//! map is both the inline error source for each field and the "is the form
//! valid" signal: an empty map means there is nothing to fix.

use super::data::{Field, FormData};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Minimum trimmed length of the message body, in characters.
///
pub const MIN_MESSAGE_LENGTH: usize = 10;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Reasons a single field fails validation.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field must not be blank
    #[error("{} is required", .field.label())]
    Required { field: Field },

    /// Field has a value of the wrong shape
    #[error("Please enter a valid {}", .field.format_noun())]
    InvalidFormat { field: Field },

    /// Field is shorter than allowed
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },
}

/// Mapping of field to its current validation failure.
///
/// Iteration follows the canonical field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, ValidationError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, error: ValidationError) {
        let field = match &error {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::TooShort { field, .. } => *field,
        };
        self.0.insert(field, error);
    }

    /// Remove the entry for a field. Removing a missing entry is a no-op.
    ///
    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &ValidationError)> {
        self.0.iter()
    }

    /// Return the first failing field in canonical order.
    ///
    pub fn first_invalid(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    /// Render every failure as one comma separated sentence.
    ///
    pub fn summary(&self) -> String {
        self.0
            .values()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')')
}

/// Validate every field of the form and return the failures.
///
pub fn validate(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in [Field::FirstName, Field::LastName, Field::Subject] {
        if data.get(field).trim().is_empty() {
            errors.insert(ValidationError::Required { field });
        }
    }

    if data.email.trim().is_empty() {
        errors.insert(ValidationError::Required {
            field: Field::Email,
        });
    } else if !email_pattern().is_match(&data.email) {
        errors.insert(ValidationError::InvalidFormat {
            field: Field::Email,
        });
    }

    if !data.phone.is_empty() && !data.phone.chars().all(is_phone_char) {
        errors.insert(ValidationError::InvalidFormat {
            field: Field::Phone,
        });
    }

    let message = data.message.trim();
    if message.is_empty() {
        errors.insert(ValidationError::Required {
            field: Field::Message,
        });
    } else if message.chars().count() < MIN_MESSAGE_LENGTH {
        errors.insert(ValidationError::TooShort {
            field: Field::Message,
            min: MIN_MESSAGE_LENGTH,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn valid_form() -> FormData {
        FormData {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: SafeEmail().fake(),
            phone: "+1 (555) 010-2030".to_string(),
            subject: "Partnership enquiry".to_string(),
            message: "I would like to hear more about your services.".to_string(),
            ..FormData::default()
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_form());
        assert!(errors.is_empty(), "unexpected errors: {}", errors.summary());
    }

    #[test]
    fn test_empty_first_name_is_required() {
        for first_name in ["", "   ", "\t"] {
            let data = FormData {
                first_name: first_name.to_string(),
                ..valid_form()
            };
            let errors = validate(&data);
            assert_eq!(
                errors.get(Field::FirstName),
                Some(&ValidationError::Required {
                    field: Field::FirstName
                })
            );
        }
    }

    #[test]
    fn test_default_form_errors() {
        let errors = validate(&FormData::default());
        assert_eq!(errors.len(), 5);
        assert!(!errors.contains(Field::Phone));
        assert_eq!(errors.first_invalid(), Some(Field::FirstName));
    }

    #[test]
    fn test_email_format() {
        let data = FormData {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&data).get(Field::Email),
            Some(&ValidationError::InvalidFormat {
                field: Field::Email
            })
        );

        let data = FormData {
            email: "a@b.co".to_string(),
            ..valid_form()
        };
        assert!(validate(&data).get(Field::Email).is_none());

        for bad in ["a@b", "a b@c.d", "a@@b.c", "@b.co"] {
            let data = FormData {
                email: bad.to_string(),
                ..valid_form()
            };
            assert!(validate(&data).contains(Field::Email), "{} passed", bad);
        }
    }

    #[test]
    fn test_empty_email_is_required_not_invalid() {
        let data = FormData {
            email: " ".to_string(),
            ..valid_form()
        };
        assert!(matches!(
            validate(&data).get(Field::Email),
            Some(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_message_length() {
        let data = FormData {
            message: "short".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&data).get(Field::Message),
            Some(&ValidationError::TooShort {
                field: Field::Message,
                min: MIN_MESSAGE_LENGTH
            })
        );

        let data = FormData {
            message: "1234567890".to_string(),
            ..valid_form()
        };
        assert!(validate(&data).get(Field::Message).is_none());

        // Surrounding whitespace does not count towards the length.
        let data = FormData {
            message: "  123456789  ".to_string(),
            ..valid_form()
        };
        assert!(validate(&data).contains(Field::Message));
    }

    #[test]
    fn test_phone_is_optional() {
        let data = FormData {
            phone: String::new(),
            ..valid_form()
        };
        assert!(validate(&data).is_empty());

        let data = FormData {
            phone: "call me maybe".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&data).get(Field::Phone),
            Some(&ValidationError::InvalidFormat {
                field: Field::Phone
            })
        );
    }

    #[test]
    fn test_phone_separator_is_plain_space_only() {
        for phone in ["555\t0100", "555\n0100", "555\u{a0}0100", "555\u{3000}0100"] {
            let data = FormData {
                phone: phone.to_string(),
                ..valid_form()
            };
            assert_eq!(
                validate(&data).get(Field::Phone),
                Some(&ValidationError::InvalidFormat {
                    field: Field::Phone
                }),
                "{:?} passed",
                phone
            );
        }

        let data = FormData {
            phone: "555 0100".to_string(),
            ..valid_form()
        };
        assert!(validate(&data).get(Field::Phone).is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Required {
                field: Field::FirstName
            }
            .to_string(),
            "First name is required"
        );
        assert_eq!(
            ValidationError::InvalidFormat {
                field: Field::Email
            }
            .to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::TooShort {
                field: Field::Message,
                min: 10
            }
            .to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_summary_follows_canonical_order() {
        let data = FormData {
            message: "hi".to_string(),
            first_name: String::new(),
            ..valid_form()
        };
        assert_eq!(
            validate(&data).summary(),
            "First name is required, Message must be at least 10 characters"
        );
    }
}
