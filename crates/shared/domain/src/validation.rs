//! Field validation contract.
//!
//! Entities never accept state directly. They hand the prospective props to a
//! [`ValidatorFields`] strategy and only commit when it reports no violations.
//! [`SchemaValidator`] is the default strategy: it runs the declarative rules
//! declared with `#[derive(Validate)]` on the props type.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// Violations keyed by field name, each with its messages in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field's violation list.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages recorded for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of every field that failed.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

/// Validation strategy injected into entity construction and mutation.
pub trait ValidatorFields<P>: Send + Sync {
    /// Check the full prop set, collecting every violated field in one pass.
    fn validate(&self, data: &P) -> Result<(), FieldErrors>;
}

/// Runs the `validator` derive rules declared on the props type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl<P: Validate> ValidatorFields<P> for SchemaValidator {
    fn validate(&self, data: &P) -> Result<(), FieldErrors> {
        data.validate().map_err(FieldErrors::from)
    }
}
