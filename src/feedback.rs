//! Transient status messages the presentation layer renders.
//!
//! Pure data: the stores report outcomes, this module shapes them into
//! the colored one-line messages the page shows, together with the fixed
//! cosmetic delays (how long a message stays visible, how long the
//! post-login redirect waits). Rendering and timing belong to the
//! presentation layer.

use crate::core::StoreError;
use std::time::Duration;

/// How long a transient message stays on screen before it is cleared
pub const MESSAGE_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// Pause between a successful login message and the redirect
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Rendered green
    Success,
    /// Rendered red
    Error,
}

/// One user-facing status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }

    /// Message shown after a successful registration
    pub fn account_created() -> Self {
        Self::success("Account created correctly, you can login")
    }

    /// Message shown after a successful login
    pub fn welcome(display_name: &str) -> Self {
        Self::success(format!("Already, welcome {display_name}!"))
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}

impl From<&StoreError> for Feedback {
    fn from(err: &StoreError) -> Self {
        Self::error(err.to_string())
    }
}
