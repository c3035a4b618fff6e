#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Pixels kept free on each side of a screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(default)]
pub struct Margin {
    pub top: u32,
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Margin {
    pub const fn new(top: u32, left: u32, right: u32, bottom: u32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }

    pub fn horizontal(&self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    pub fn vertical(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }
}

/// How an image is laid into the drawable area of a screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Uniform,
    #[default]
    UniformToFill,
    Stretch,
    Center,
    Tile,
}

impl Placement {
    pub const ALL: [Placement; 5] = [
        Placement::Uniform,
        Placement::UniformToFill,
        Placement::Stretch,
        Placement::Center,
        Placement::Tile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Placement::Uniform => "Uniform",
            Placement::UniformToFill => "Uniform to fill",
            Placement::Stretch => "Stretch",
            Placement::Center => "Center",
            Placement::Tile => "Tile",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw rectangle of an attached display, in virtual desktop pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Screen {
    /// Index of the display this entry configures.
    pub index: usize,

    pub cycle_randomly: bool,

    /// Wallpaper shown while `cycle_randomly` is off.
    pub fixed_image: Option<PathBuf>,

    /// How every wallpaper shown on this screen is fitted, the fixed one
    /// and the randomly picked ones alike.
    pub placement: Placement,

    pub margin: Margin,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            index: 0,
            cycle_randomly: true,
            fixed_image: None,
            placement: Placement::default(),
            margin: Margin::default(),
        }
    }
}
