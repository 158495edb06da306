//! Contract with the hosted sign-in page.
//!
//! The onboarding wizard points an embedded browser view at
//! [`AUTH_PAGE_URL`]. Once the user finishes signing in, the page renders the
//! account profile as JSON inside a well-known element; the wizard reads it
//! back by evaluating [`RESULT_EXTRACTION_SCRIPT`] in the page.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The hosted sign-in flow the authenticate page loads.
pub const AUTH_PAGE_URL: &str = "https://id.mailhatch.app/onboarding";

/// Id of the element the sign-in page fills with the profile JSON.
pub const RESULT_ELEMENT_ID: &str = "mailhatch-account";

/// Script evaluated inside the loaded page. Resolves to the profile JSON, or
/// null while the user is still signing in.
pub const RESULT_EXTRACTION_SCRIPT: &str = "\
    var el = document.querySelector('#mailhatch-account');\
    el ? el.innerText : null;";

/// Profile returned by the hosted sign-in flow.
///
/// The page guarantees `email`, `firstname`, and `lastname`; anything else it
/// adds is tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Email address the user signed in with.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub firstname: Option<String>,
    /// Family name.
    #[serde(default)]
    pub lastname: Option<String>,
    /// Session token issued by the sign-in service, when present.
    #[serde(default)]
    pub account_token: Option<String>,
}

impl AuthenticatedUser {
    /// Parse the text extracted from the result element.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or has no email.
    pub fn parse(text: &str) -> Result<Self> {
        let user: Self = serde_json::from_str(text)?;
        if user.email.trim().is_empty() {
            return Err(Error::MissingField("email"));
        }
        Ok(user)
    }

    /// Display name derived from the name parts, `"First Last"`.
    ///
    /// Missing parts become empty strings, matching what the sign-in page
    /// sends for accounts without a stored name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or(""),
            self.lastname.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_profile() {
        let user =
            AuthenticatedUser::parse(r#"{"email":"a@b.com","firstname":"A","lastname":"B"}"#)
                .unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.display_name(), "A B");
    }

    #[test]
    fn tolerates_extra_fields() {
        let user = AuthenticatedUser::parse(
            r#"{"email":"a@b.com","firstname":"A","lastname":"B","account_token":"tok","plan":"pro"}"#,
        )
        .unwrap();
        assert_eq!(user.account_token.as_deref(), Some("tok"));
    }

    #[test]
    fn missing_names_become_empty_parts() {
        let user = AuthenticatedUser::parse(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(user.display_name(), " ");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(AuthenticatedUser::parse("not json").is_err());
    }

    #[test]
    fn rejects_empty_email() {
        let result = AuthenticatedUser::parse(r#"{"email":""}"#);
        assert!(matches!(result, Err(Error::MissingField("email"))));
    }

    #[test]
    fn extraction_script_targets_result_element() {
        assert!(RESULT_EXTRACTION_SCRIPT.contains(RESULT_ELEMENT_ID));
    }
}
