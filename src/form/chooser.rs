//! Contact method chooser.
//!
//! A radio group: arrow keys move the selection and select at the same time,
//! wrapping at either end. Every change is announced like the dropdown does.

use super::data::ContactMethod;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMethodChooser {
    selected: usize,
    announcement: String,
}

impl ContactMethodChooser {
    pub fn new(method: ContactMethod) -> Self {
        let mut chooser = ContactMethodChooser::default();
        chooser.sync(method);
        chooser
    }

    pub fn options(&self) -> &'static [ContactMethod] {
        &ContactMethod::ALL
    }

    pub fn selected(&self) -> ContactMethod {
        ContactMethod::ALL[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// Select the option at `index`, clamped to the last option.
    ///
    pub fn select(&mut self, index: usize) -> ContactMethod {
        self.selected = index.min(ContactMethod::ALL.len() - 1);
        let method = self.selected();
        self.announcement = format!("Selected: {}", method.label());
        method
    }

    pub fn next(&mut self) -> ContactMethod {
        self.select((self.selected + 1) % ContactMethod::ALL.len())
    }

    pub fn previous(&mut self) -> ContactMethod {
        let len = ContactMethod::ALL.len();
        self.select((self.selected + len - 1) % len)
    }

    /// Follow a value set elsewhere, without announcing it.
    ///
    pub fn sync(&mut self, method: ContactMethod) {
        self.selected = ContactMethod::ALL
            .iter()
            .position(|m| *m == method)
            .unwrap_or(0);
    }
}
