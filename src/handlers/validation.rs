//! Client-side style validation performed before a form reaches the store.
//!
//! Only presence and a non-negative floor on money are checked; formats
//! such as email shape are left alone.

use serde::Serialize;
use serde_json::json;

use crate::error::{ApiError, validation_error};

/// One rejected form field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Collects every problem in a submission so they can be reported together
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects empty or whitespace-only text
    pub fn require_text(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, format!("{} is required", humanize(field)));
        }
        self
    }

    /// Rejects a missing dropdown selection
    pub fn require_selection<T>(&mut self, field: &'static str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            let noun = field.trim_end_matches("_id").replace('_', " ");
            self.push(field, format!("select a {noun}"));
        }
        self
    }

    /// Rejects negative or non-finite monetary amounts
    pub fn non_negative(&mut self, field: &'static str, value: Option<f64>) -> &mut Self {
        if let Some(amount) = value
            && (!amount.is_finite() || amount < 0.0)
        {
            self.push(field, format!("{} must be zero or more", humanize(field)));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok` when nothing was rejected, otherwise a 400 listing every field
    pub fn finish(&mut self, message: &str) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let fields = std::mem::take(&mut self.errors);
        Err(validation_error(message, json!({ "fields": fields })))
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError { field, message });
    }
}

/// Trims free text and maps blank input to `None`
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn humanize(field: &str) -> String {
    let spaced = field.trim_end_matches("_id").replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}
