//! Form state store.
//!
//! All mutation goes through [`FormAction`] and the single reducer
//! [`FormStore::reduce`]; the `&mut self` setters are thin wrappers around it.

use super::data::{ContactMethod, Field, FormData, Urgency};
use super::validator::ErrorMap;

/// Specifying every mutation the store accepts.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetField(Field, String),
    SetNewsletter(bool),
    SetContactMethod(ContactMethod),
    SetUrgency(Urgency),
    SetErrors(ErrorMap),
    SetSubmitting(bool),
    Reset,
}

/// Houses the form values, the per-field errors and the submitting flag.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    data: FormData,
    errors: ErrorMap,
    submitting: bool,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the next store.
    ///
    pub fn reduce(mut self, action: FormAction) -> FormStore {
        match action {
            FormAction::SetField(field, value) => {
                *self.data.get_mut(field) = value;
                // Editing a field clears its error without revalidating.
                self.errors.remove(field);
            }
            FormAction::SetNewsletter(newsletter) => self.data.newsletter = newsletter,
            FormAction::SetContactMethod(method) => self.data.contact_method = method,
            FormAction::SetUrgency(urgency) => self.data.urgency = urgency,
            FormAction::SetErrors(errors) => self.errors = errors,
            FormAction::SetSubmitting(submitting) => self.submitting = submitting,
            FormAction::Reset => {
                self.data = FormData::default();
                self.errors = ErrorMap::new();
            }
        }
        self
    }

    /// Apply an action in place.
    ///
    pub fn dispatch(&mut self, action: FormAction) -> &mut Self {
        *self = std::mem::take(self).reduce(action);
        self
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        self.dispatch(FormAction::SetField(field, value.into()))
    }

    pub fn set_newsletter(&mut self, newsletter: bool) -> &mut Self {
        self.dispatch(FormAction::SetNewsletter(newsletter))
    }

    pub fn set_contact_method(&mut self, method: ContactMethod) -> &mut Self {
        self.dispatch(FormAction::SetContactMethod(method))
    }

    pub fn set_urgency(&mut self, urgency: Urgency) -> &mut Self {
        self.dispatch(FormAction::SetUrgency(urgency))
    }

    pub fn set_errors(&mut self, errors: ErrorMap) -> &mut Self {
        self.dispatch(FormAction::SetErrors(errors))
    }

    pub fn set_submitting(&mut self, submitting: bool) -> &mut Self {
        self.dispatch(FormAction::SetSubmitting(submitting))
    }

    pub fn reset(&mut self) -> &mut Self {
        self.dispatch(FormAction::Reset)
    }
}
