use thiserror::Error;

pub const ACK_TITLE: &str = "Message sent! I'll get back to you soon.";
pub const ACK_DESCRIPTION: &str = "Thank you for reaching out!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

/// Contact form contents. Submitting never leaves the page: a valid form is
/// acknowledged locally and cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Missing("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::Missing("email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Missing("message"));
        }
        Ok(())
    }

    /// Validates, then clears every field. On error the form is untouched.
    pub fn submit(&mut self) -> Result<Acknowledgment, ContactError> {
        self.validate()?;
        *self = Self::default();
        Ok(Acknowledgment {
            title: ACK_TITLE,
            description: ACK_DESCRIPTION,
        })
    }
}

// Same shape the browser's type="email" check accepts: local@domain, no spaces.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
