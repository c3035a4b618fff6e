#![forbid(unsafe_code)]

mod error;
mod history;
mod history_scope;
mod rotation;
mod screen;

pub use error::Error;
pub use history::History;
pub use history_scope::HistoryScope;
pub use rotation::Rotation;
pub use screen::{Bounds, Margin, Placement, Screen};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Environment variables with this prefix override file values, e.g.
/// `WALLROT_HISTORY__CAPACITY=3`.
pub const ENV_PREFIX: &str = "WALLROT_";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rotation: Rotation,

    pub history: History,

    /// Per-screen settings. Screens without an entry use `Screen::default()`.
    pub screens: Vec<Screen>,

    /// Display rectangles used when the caller does not enumerate displays.
    pub displays: Vec<Bounds>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration from a TOML file, layered under environment
    /// overrides, and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }

        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file_exact(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without environment overrides.
    pub fn from_toml(document: &str) -> Result<Self, Error> {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string(document))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.history.capacity < 1 {
            return Err(Error::InvalidValue {
                field: "history.capacity",
                reason: format!("{} is below 1", self.history.capacity),
            });
        }
        if self.rotation.interval.is_zero() {
            return Err(Error::InvalidValue {
                field: "rotation.interval",
                reason: "must be at least one second".into(),
            });
        }

        let mut seen = HashSet::new();
        for screen in &self.screens {
            if !seen.insert(screen.index) {
                return Err(Error::InvalidValue {
                    field: "screens.index",
                    reason: format!("screen {} is configured twice", screen.index),
                });
            }
        }

        Ok(())
    }

    /// Settings for `index`, or the defaults when the screen has no entry.
    pub fn screen(&self, index: usize) -> Screen {
        self.screens
            .iter()
            .find(|screen| screen.index == index)
            .cloned()
            .unwrap_or_else(|| Screen {
                index,
                ..Screen::default()
            })
    }
}
