//! # mailhatch-auth
//!
//! Hosted sign-in flow contract for the `MailHatch` onboarding wizard.
//!
//! The wizard authenticates users by loading a hosted web flow in an
//! embedded browser view. This crate is everything that contract needs,
//! UI-free:
//!
//! - **`hosted`**: the flow URL, the result-extraction script, and the
//!   [`AuthenticatedUser`] profile the page hands back
//! - **`net_errors`**: error-code lookup for the view's networking stack,
//!   including the user-abort code that is deliberately not surfaced
//! - **`session`**: the persisted sign-in session ([`SessionStore`])
//!
//! ## Reading the sign-in result
//!
//! ```ignore
//! use mailhatch_auth::{AuthenticatedUser, hosted};
//!
//! // Evaluate hosted::RESULT_EXTRACTION_SCRIPT in the loaded page, then:
//! let user = AuthenticatedUser::parse(&extracted_text)?;
//! println!("signed in as {} <{}>", user.display_name(), user.email);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod hosted;
pub mod net_errors;
pub mod session;

pub use error::{Error, Result};
pub use hosted::AuthenticatedUser;
pub use session::{SessionStore, UserSession};
