#![forbid(unsafe_code)]

use crate::history_scope::HistoryScope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct History {
    /// Number of recent wallpapers excluded from random selection.
    pub capacity: usize,

    pub scope: HistoryScope,

    /// Keep the recent-wallpaper window when the rotation is stopped.
    pub keep_on_stop: bool,
}

impl Default for History {
    fn default() -> Self {
        Self {
            capacity: 1,
            scope: HistoryScope::default(),
            keep_on_stop: false,
        }
    }
}
