#![forbid(unsafe_code)]

use crate::domain::ScreenIndex;

/// Represents all possible errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error occurred while loading or validating the configuration.
    #[error("config error: {0}")]
    Config(#[from] config::Error),

    /// No display is enumerated at the given index.
    #[error("screen {index} is out of range: {count} display(s) attached")]
    ScreenIndexOutOfRange { index: ScreenIndex, count: usize },

    /// A history window must hold at least one wallpaper.
    #[error("history capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// The margin leaves no drawable area on the screen.
    #[error("margin leaves no drawable area on screen {0}")]
    InvalidMargin(ScreenIndex),

    /// The same screen was handed to a cycle more than once.
    #[error("screen {0} appears more than once in the cycle")]
    DuplicateScreen(ScreenIndex),

    /// Settings can only be applied to a profile of the same screen.
    #[error("cannot apply settings of screen {source_index} to screen {target_index}")]
    IncompatibleTarget {
        source_index: ScreenIndex,
        target_index: ScreenIndex,
    },

    /// Nobody supplied a wallpaper for the cycle.
    #[error("no candidate wallpapers were supplied for this cycle")]
    EmptyCandidatePool,
}

impl Error {
    /// Whether the error only skips the current cycle and leaves the
    /// scheduler running.
    pub fn is_cycle_skip(&self) -> bool {
        matches!(self, Error::EmptyCandidatePool)
    }
}
