//! Form Schemas
//!
//! Client-side validation run before any request is sent. Errors are
//! keyed by field name and rendered next to the field.

use std::collections::BTreeMap;

use serde::Serialize;

pub const TITLE_MAX_LEN: usize = 255;

/// Validation errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Check a title field, returning the trimmed value
pub fn validate_title(raw: &str) -> Result<String, FieldErrors> {
    let title = raw.trim();
    let mut errors = FieldErrors::new();
    if title.is_empty() {
        errors.add("title", "Title is required");
    } else if title.chars().count() > TITLE_MAX_LEN {
        errors.add("title", format!("Title must be at most {} characters", TITLE_MAX_LEN));
    }
    errors.into_result(title.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::new();
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.add("email", "Enter a valid email address");
    }
    if password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors.into_result(Credentials { email: email.to_string(), password: password.to_string() })
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

// ========================
// Request payloads
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitlePayload<'a> {
    pub title: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewModule<'a> {
    pub title: &'a str,
    pub course_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLesson<'a> {
    pub title: &'a str,
    pub module_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Intro 2 ").unwrap(), "Intro 2");
    }

    #[test]
    fn test_blank_title_rejected() {
        let errors = validate_title("   ").unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_overlong_title_rejected() {
        let long = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(validate_title(&long).is_err());
        assert!(validate_title(&"x".repeat(TITLE_MAX_LEN)).is_ok());
    }

    #[test]
    fn test_login_validation() {
        let creds = validate_login(" admin@example.com ", "secret").unwrap();
        assert_eq!(creds.email, "admin@example.com");

        let errors = validate_login("not-an-email", "").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("email").is_some());
        assert_eq!(errors.get("password"), Some("Password is required"));

        assert!(validate_login("a@b", "x").is_err());
        assert!(validate_login("a@@b.c", "x").is_err());
    }
}
