use derive_more::Display;
use std::time::{Duration, Instant};

use crate::PopupConfig;

/// Visual state of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusKind {
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
}

/// A status message that hides itself after a fixed interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: String,
    /// When the banner was shown
    pub shown_at: Instant,
    /// How long it stays visible
    pub visible_for: Duration,
}

impl StatusBanner {
    /// The banner reported after a successful import
    pub fn success(config: &PopupConfig, now: Instant) -> Self {
        Self {
            kind: StatusKind::Success,
            message: "Success! Added bookmarks!".to_string(),
            shown_at: now,
            visible_for: config.success_interval(),
        }
    }

    /// The banner reported for any failure
    pub fn error(message: impl std::fmt::Display, config: &PopupConfig, now: Instant) -> Self {
        Self {
            kind: StatusKind::Error,
            message: format!("Error! {}", message),
            shown_at: now,
            visible_for: config.error_interval(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    /// The moment the banner should be hidden
    pub fn hides_at(&self) -> Instant {
        self.shown_at + self.visible_for
    }

    /// Returns true while the banner should still be shown
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.hides_at()
    }
}
