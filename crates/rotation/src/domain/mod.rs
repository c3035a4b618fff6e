#![forbid(unsafe_code)]

mod geometry;
mod ids;
mod image;
mod overlay;
mod profile;

pub use config::{Margin, Placement};
pub use geometry::{Rect, ScreenGeometry};
pub use ids::{ImageKey, ScreenIndex};
pub use image::Image;
pub use overlay::{OverlayPosition, TextOverlay};
pub use profile::ScreenProfile;
