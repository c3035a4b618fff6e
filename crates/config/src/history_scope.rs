#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Which screens share a repeat-avoidance window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryScope {
    /// Every screen remembers only what it showed itself.
    #[default]
    PerScreen,
    /// One window for the whole rotation; a wallpaper shown on any screen is
    /// avoided on all of them.
    Shared,
}
