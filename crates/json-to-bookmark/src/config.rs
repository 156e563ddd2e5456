//! Configuration options for the popup.
//!
//! This module provides the `PopupConfig` struct which controls how long
//! status banners stay visible and how the picker labels its entries.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration options for the popup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// How long a success banner stays visible, in milliseconds.
    pub success_banner_ms: u64,

    /// How long an error banner stays visible, in milliseconds.
    /// Longer than the success interval since error text needs reading.
    pub error_banner_ms: u64,

    /// Label of the group listing every top-level folder.
    pub umbrella_label: String,

    /// Text of the hidden placeholder shown while nothing is selected.
    pub placeholder_label: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            success_banner_ms: 3000,
            error_banner_ms: 6000,
            umbrella_label: "All Bookmarks".to_string(),
            placeholder_label: "Save to folder".to_string(),
        }
    }
}

impl PopupConfig {
    /// Create new popup options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from JSON; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse popup configuration")
    }

    /// Set the success banner interval.
    pub fn success_banner(mut self, interval: Duration) -> Self {
        self.success_banner_ms = interval.as_millis() as u64;
        self
    }

    /// Set the error banner interval.
    pub fn error_banner(mut self, interval: Duration) -> Self {
        self.error_banner_ms = interval.as_millis() as u64;
        self
    }

    /// Set the umbrella group label.
    pub fn umbrella_label(mut self, label: impl Into<String>) -> Self {
        self.umbrella_label = label.into();
        self
    }

    /// Set the placeholder text.
    pub fn placeholder_label(mut self, label: impl Into<String>) -> Self {
        self.placeholder_label = label.into();
        self
    }

    /// The success banner interval as a `Duration`.
    pub fn success_interval(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }

    /// The error banner interval as a `Duration`.
    pub fn error_interval(&self) -> Duration {
        Duration::from_millis(self.error_banner_ms)
    }
}
