//! Validation Utilities
//!
//! `#[validate(custom(...))]` adapters over the pure predicates in
//! [`crate::domain::rules`], and a readable summary of collected errors.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::domain::rules;

/// Key `validator` files struct-level (schema) errors under.
const STRUCT_LEVEL: &str = "__all__";

fn check(ok: bool, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(code).with_message(Cow::Borrowed(message)))
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    check(rules::is_valid_email(email), "email", "Email must be a valid address")
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    check(
        rules::is_valid_password(password),
        "password",
        "Password needs 6+ characters with upper case, lower case and a special character",
    )
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    check(
        rules::is_valid_username(username),
        "username",
        "Username must be 3-19 letters, digits or interior spaces",
    )
}

pub fn validate_postal_code(postal_code: &str) -> Result<(), ValidationError> {
    check(
        rules::is_valid_postal_code(postal_code),
        "postal_code",
        "Postal code must be a Canadian code such as K2C4V1",
    )
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    check(
        rules::is_valid_title(title),
        "title",
        "Title must be up to 80 letters, digits or interior spaces",
    )
}

pub fn validate_description(description: &str, title: &str) -> Result<(), ValidationError> {
    check(
        rules::is_valid_description(description, title),
        "description",
        "Description must be 20-2000 characters and longer than the title",
    )
}

pub fn validate_listing_date(value: &str) -> Result<(), ValidationError> {
    check(
        rules::parse_date(value).is_some_and(rules::is_valid_listing_date),
        "listing_date",
        "Date must be a YYYY-MM-DD day after 2021-01-02 and before 2025-01-02",
    )
}

pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    check(
        rules::parse_date(value).is_some(),
        "date",
        "Date must be a YYYY-MM-DD day",
    )
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    check(!value.trim().is_empty(), "required", "Value is required")
}

/// Human-readable, deterministic summary: `field: message; field: message`.
/// Struct-level errors appear as the bare message.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                if field == STRUCT_LEVEL {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect();

    if parts.is_empty() {
        return "Validation failed".into();
    }

    parts.sort();
    parts.join("; ")
}
