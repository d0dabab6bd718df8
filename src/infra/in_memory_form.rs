use std::collections::BTreeMap;

use tracing::debug;

use crate::app::ports::FormControl;

/// In-memory form control for hosts without a form layer of their own, and for tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryFormControl {
    text: String,
    validity: BTreeMap<String, bool>,
}

impl InMemoryFormControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Replace the raw text, as the user typing or the widget filling it in would
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append characters to the raw text
    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn validity(&self, key: &str) -> Option<bool> {
        self.validity.get(key).copied()
    }
}

impl FormControl for InMemoryFormControl {
    fn raw_text(&self) -> &str {
        &self.text
    }

    fn clear_raw_text(&mut self) {
        self.text.clear();
    }

    fn is_valid(&self) -> bool {
        self.validity.values().all(|valid| *valid)
    }

    fn set_validity(&mut self, key: &str, valid: bool) {
        debug!(key, valid, "Validity updated");
        self.validity.insert(key.to_string(), valid);
    }
}
