#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Rotation {
    /// Time between two cycles in seconds.
    #[serde_as(as = "serde_with::DurationSeconds")]
    pub interval: Duration,

    /// Start cycling as soon as the rotator runs.
    pub autostart: bool,

    /// Initial capacity reserved for each candidate pool.
    pub pool_capacity_hint: usize,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30 * 60),
            autostart: true,
            pool_capacity_hint: 50,
        }
    }
}
