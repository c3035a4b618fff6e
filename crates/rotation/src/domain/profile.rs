#![forbid(unsafe_code)]

use super::{Image, Rect, ScreenGeometry, ScreenIndex, TextOverlay};
use crate::error::Error;
use config::{Margin, Placement};
use std::fmt;
use tracing::trace;

/// Settings of one display: how its wallpaper is chosen, where it may be
/// drawn, and what text goes on top.
///
/// `Clone` is a deep copy; an edit session clones a profile, mutates the
/// copy and commits it back with [`ScreenProfile::apply_to`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenProfile {
    index: ScreenIndex,
    cycle_randomly: bool,
    fixed_image: Image,
    placement: Placement,
    geometry: ScreenGeometry,
    overlays: Vec<TextOverlay>,
}

impl ScreenProfile {
    /// Create the default profile for the display at `index` of `displays`.
    pub fn new(index: usize, displays: &[Rect]) -> Result<Self, Error> {
        let index = ScreenIndex::new(index);
        let raw_bounds = Self::lookup(index, displays)?;

        Ok(Self {
            index,
            cycle_randomly: true,
            fixed_image: Image::default(),
            placement: Placement::default(),
            geometry: ScreenGeometry::new(raw_bounds, Margin::default()),
            overlays: Vec::new(),
        })
    }

    /// Build a profile from its configuration entry.
    pub fn from_config(screen: &config::Screen, displays: &[Rect]) -> Result<Self, Error> {
        let mut profile = Self::new(screen.index, displays)?;
        profile.cycle_randomly = screen.cycle_randomly;
        if let Some(path) = &screen.fixed_image {
            profile.fixed_image = Image::new(path.clone());
        }
        profile.set_placement(screen.placement);
        profile.set_margin(screen.margin);

        if !profile.effective_bounds().has_area() {
            return Err(Error::InvalidMargin(profile.index));
        }
        Ok(profile)
    }

    fn lookup(index: ScreenIndex, displays: &[Rect]) -> Result<Rect, Error> {
        displays
            .get(index.get())
            .copied()
            .ok_or(Error::ScreenIndexOutOfRange {
                index,
                count: displays.len(),
            })
    }

    pub fn index(&self) -> ScreenIndex {
        self.index
    }

    pub fn cycle_randomly(&self) -> bool {
        self.cycle_randomly
    }

    pub fn set_cycle_randomly(&mut self, cycle_randomly: bool) {
        self.cycle_randomly = cycle_randomly;
    }

    /// Wallpaper used while random cycling is off.
    pub fn fixed_image(&self) -> &Image {
        &self.fixed_image
    }

    /// Replace the fixed wallpaper. Its placement is kept as given.
    pub fn set_fixed_image(&mut self, image: Image) {
        self.fixed_image = image;
    }

    /// How wallpapers are fitted into this screen.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Also applies to the fixed wallpaper.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
        self.fixed_image.placement = placement;
    }

    /// `image` as it should be shown on this screen.
    pub fn place(&self, image: Image) -> Image {
        image.with_placement(self.placement)
    }

    pub fn geometry(&self) -> &ScreenGeometry {
        &self.geometry
    }

    pub fn margin(&self) -> Margin {
        self.geometry.margin()
    }

    pub fn set_margin(&mut self, margin: Margin) {
        self.geometry.set_margin(margin);
        trace!(screen = %self.index, bounds = ?self.geometry.effective_bounds(), "margin changed");
    }

    pub fn effective_bounds(&self) -> Rect {
        self.geometry.effective_bounds()
    }

    /// Re-read the raw bounds of this screen from a fresh display enumeration.
    pub fn refresh_bounds(&mut self, displays: &[Rect]) -> Result<(), Error> {
        let raw_bounds = Self::lookup(self.index, displays)?;
        self.geometry.set_raw_bounds(raw_bounds);
        Ok(())
    }

    pub fn overlays(&self) -> &[TextOverlay] {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut Vec<TextOverlay> {
        &mut self.overlays
    }

    /// Copy mode, fixed image, placement, margin and overlays onto `other`.
    ///
    /// The overlay list of `other` is replaced, not merged. `other` keeps its
    /// own raw bounds, so its drawable area is recomputed against them.
    pub fn apply_to(&self, other: &mut ScreenProfile) -> Result<(), Error> {
        if other.index != self.index {
            return Err(Error::IncompatibleTarget {
                source_index: self.index,
                target_index: other.index,
            });
        }

        other.cycle_randomly = self.cycle_randomly;
        other.fixed_image = self.fixed_image.clone();
        other.placement = self.placement;
        other.set_margin(self.margin());
        other.overlays.clone_from(&self.overlays);
        Ok(())
    }
}

impl fmt::Display for ScreenProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let margin = self.margin();
        write!(
            f,
            "Cycle Randomly: {}, Margins: [{}, {}, {}, {}], Static Wallpaper: {}",
            self.cycle_randomly,
            margin.top,
            margin.left,
            margin.right,
            margin.bottom,
            self.fixed_image.key,
        )
    }
}
