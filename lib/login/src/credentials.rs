//! Email/password pair typed into the login form.

use std::fmt;

/// The two fields of the login form.
///
/// Lives only as long as the view holding it. The password never shows up
/// in `Debug` output, so credentials can sit inside traced structures.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from raw field values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email field.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password field.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// True when neither field is empty.
    ///
    /// Only emptiness is checked; address syntax is the browser's and the
    /// auth service's business.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_requires_both_fields() {
        assert!(Credentials::new("a@b.com", "x").is_complete());
        assert!(!Credentials::new("", "x").is_complete());
        assert!(!Credentials::new("a@b.com", "").is_complete());
        assert!(!Credentials::default().is_complete());
    }

    #[test]
    fn whitespace_counts_as_input() {
        assert!(Credentials::new(" ", " ").is_complete());
    }

    #[test]
    fn debug_redacts_password() {
        let credentials = Credentials::new("a@b.com", "hunter2");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
