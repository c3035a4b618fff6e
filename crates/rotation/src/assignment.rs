#![forbid(unsafe_code)]

use crate::domain::{Image, Rect, ScreenIndex, ScreenProfile, TextOverlay};
use std::collections::BTreeMap;

/// What one screen shows after a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenAssignment {
    pub image: Image,
    /// Drawable area the image is placed into.
    pub bounds: Rect,
    pub overlays: Vec<TextOverlay>,
    /// Whether the image came out of the candidate pool.
    pub randomly_selected: bool,
}

impl ScreenAssignment {
    pub(crate) fn new(profile: &ScreenProfile, image: Image, randomly_selected: bool) -> Self {
        Self {
            image,
            bounds: profile.effective_bounds(),
            overlays: profile.overlays().to_vec(),
            randomly_selected,
        }
    }
}

/// Result of a successful cycle, covering every screen handed to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleAssignment {
    pub cycle_id: u64,
    screens: BTreeMap<ScreenIndex, ScreenAssignment>,
}

impl CycleAssignment {
    pub(crate) fn new(cycle_id: u64) -> Self {
        Self {
            cycle_id,
            screens: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, screen: ScreenIndex, assignment: ScreenAssignment) {
        self.screens.insert(screen, assignment);
    }

    pub fn get(&self, screen: ScreenIndex) -> Option<&ScreenAssignment> {
        self.screens.get(&screen)
    }

    pub fn image(&self, screen: ScreenIndex) -> Option<&Image> {
        self.get(screen).map(|assignment| &assignment.image)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScreenIndex, &ScreenAssignment)> {
        self.screens.iter().map(|(screen, assignment)| (*screen, assignment))
    }

    pub fn screens(&self) -> impl Iterator<Item = ScreenIndex> + '_ {
        self.screens.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}
