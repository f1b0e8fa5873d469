//! Add-student form checks. Run before any request is made.

use std::sync::OnceLock;

use campus_types::{ValidationError, student::NewStudent};
use regex::Regex;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Raw input of the add-student form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub id: String,
    pub department: String,
    pub email: String,
}

impl StudentForm {
    /// Required fields first, then the email format.
    pub fn validate(&self) -> Result<NewStudent, ValidationError> {
        let fields = [
            ("name", &self.name),
            ("id", &self.id),
            ("department", &self.department),
            ("email", &self.email),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(NewStudent {
            name: self.name.trim().to_string(),
            id: self.id.trim().to_string(),
            department: self.department.trim().to_string(),
            email: email.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
