//! Error-code lookup for the embedded browser view's networking stack.
//!
//! The view reports load failures with Chromium-style negative error codes.
//! This module names the codes the sign-in page cares about and turns a
//! failed load into a message a person can act on.

/// Load was aborted by the user agent, typically because navigation moved on
/// before the request finished. Not a real failure.
pub const ERR_ABORTED: i32 = -3;

/// Generic failure, reported when the view has nothing better to say.
pub const ERR_FAILED: i32 = -2;

/// Human-readable names for the codes the sign-in page is likely to see.
const DESCRIPTIONS: &[(i32, &str)] = &[
    (ERR_FAILED, "The load failed"),
    (-7, "The connection timed out"),
    (-21, "The network changed"),
    (-100, "The connection was closed"),
    (-101, "The connection was reset"),
    (-102, "The connection was refused"),
    (-105, "The server's address could not be resolved"),
    (-106, "The internet connection is offline"),
    (-109, "The server's address is unreachable"),
    (-118, "The connection attempt timed out"),
    (-200, "The server's certificate does not match its address"),
    (-201, "The server's certificate has expired"),
    (-202, "The server's certificate is not trusted"),
    (-324, "The server closed the connection without sending data"),
];

/// Whether a failure code denotes a user-initiated abort that should be
/// ignored rather than surfaced.
#[must_use]
pub const fn is_user_abort(code: i32) -> bool {
    code == ERR_ABORTED
}

/// Human-readable name for a numeric error code, if known.
#[must_use]
pub fn describe(code: i32) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
}

/// Synthesize a load-failure message from the failed URL and error code.
///
/// Used when the view reports a failure without its own description.
#[must_use]
pub fn load_failure_message(url: &str, code: i32) -> String {
    describe(code).map_or_else(
        || format!("Could not reach {url}. Error {code}."),
        |text| format!("Could not reach {url}. {text}."),
    )
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
    fn abort_is_classified_as_user_abort() {
        assert!(is_user_abort(ERR_ABORTED));
        assert!(!is_user_abort(ERR_FAILED));
        assert!(!is_user_abort(-102));
    }

    #[test]
    fn known_codes_are_described() {
        assert_eq!(describe(-102), Some("The connection was refused"));
        assert_eq!(describe(-105), Some("The server's address could not be resolved"));
        assert_eq!(describe(12345), None);
    }

    #[test]
    fn message_uses_description_when_known() {
        let message = load_failure_message("https://id.mailhatch.app/onboarding", -106);
        assert_eq!(
            message,
            "Could not reach https://id.mailhatch.app/onboarding. The internet connection is offline."
        );
    }

    #[test]
    fn message_falls_back_to_numeric_code() {
        let message = load_failure_message("https://id.mailhatch.app/onboarding", -999);
        assert_eq!(
            message,
            "Could not reach https://id.mailhatch.app/onboarding. Error -999."
        );
    }
}
