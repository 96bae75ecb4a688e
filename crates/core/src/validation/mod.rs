//! Form validation machinery.
//!
//! Forms are trimmed, checked with `validator` derives, and escaped. The
//! outcome is a [`Checked`] value: the sanitized input plus the ordered list
//! of [`FieldViolation`]s. An empty list means the input may be persisted.

pub mod sanitize;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// A single field-level rule violation, shown next to the re-rendered form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Sanitized form input together with any rule violations found in it.
#[derive(Debug, Clone)]
pub struct Checked<T> {
    pub value: T,
    pub violations: Vec<FieldViolation>,
}

impl<T> Checked<T> {
    /// `true` when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert the sanitized value while keeping the violations collected so far.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            violations: self.violations,
        }
    }
}

/// Run the `validator` rules on `input` and flatten the result.
///
/// `ValidationErrors` is keyed by field name in no particular order, so the
/// violations are emitted following `field_order` (the form's field order).
/// Fields absent from `field_order` are ignored.
pub fn violations_of<T: Validate>(input: &T, field_order: &[&'static str]) -> Vec<FieldViolation> {
    match input.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => ordered_violations(&errors, field_order),
    }
}

/// Flatten `errors` into violations ordered by `field_order`.
pub fn ordered_violations(
    errors: &ValidationErrors,
    field_order: &[&'static str],
) -> Vec<FieldViolation> {
    let by_field = errors.field_errors();
    let mut violations = Vec::new();

    for &field in field_order {
        let Some(list) = by_field.get(field) else {
            continue;
        };
        for error in list.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid."));
            violations.push(FieldViolation { field, message });
        }
    }

    violations
}
