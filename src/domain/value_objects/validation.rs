use std::fmt::Display;

use serde::Serialize;

pub const USER_ID_INVALID: u16 = 100;
pub const NAME_INVALID: u16 = 101;
pub const PROVIDER_INVALID: u16 = 102;
pub const EXPIRATION_DATE_INVALID: u16 = 103;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub code: u16,
    pub message: String,
}

impl FieldError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors collected by a single validation pass, in the order they were found.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn codes(&self) -> Vec<u16> {
        self.errors.iter().map(|error| error.code).collect()
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|error| format!("{} ({})", error.message, error.code))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", messages)
    }
}
