use common::requests::EMAIL_FIELD;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// ASCII-only syntactic check. Quoted local parts and internationalized domains
/// are rejected.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Why a submission was refused. The `Display` text is shown to the submitter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", capitalize(.0))]
    MissingField(String),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Checks required fields and the email pattern of a submitted form.
#[derive(Debug, Clone)]
pub struct FormValidator {
    email: Regex,
}

impl FormValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(FormValidator {
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    pub fn is_valid_email(&self, candidate: &str) -> bool {
        self.email.is_match(candidate)
    }

    /// Reports the first field of `required` that is absent or empty.
    ///
    /// Fields are checked in the given order and checking stops at the first miss.
    pub fn require(
        &self,
        fields: &HashMap<String, String>,
        required: &[&str],
    ) -> Result<(), ValidationError> {
        match required
            .iter()
            .find(|name| fields.get(**name).map_or(true, |value| value.is_empty()))
        {
            Some(missing) => Err(ValidationError::MissingField(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Required fields first, then the `email` field against the pattern.
    pub fn validate(
        &self,
        fields: &HashMap<String, String>,
        required: &[&str],
    ) -> Result<(), ValidationError> {
        self.require(fields, required)?;
        match fields.get(EMAIL_FIELD) {
            Some(email) if !self.is_valid_email(email) => Err(ValidationError::InvalidEmail),
            _ => Ok(()),
        }
    }
}
