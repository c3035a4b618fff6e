#![forbid(unsafe_code)]

use config::{Bounds, Margin};

/// Axis-aligned rectangle in virtual desktop pixels. Width and height may be
/// zero or negative after subtracting a margin that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers at least one pixel.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Shrink by `margin` on each side.
    pub fn inset(&self, margin: &Margin) -> Self {
        Self {
            x: offset(self.x, margin.left),
            y: offset(self.y, margin.top),
            width: shrink(self.width, margin.horizontal()),
            height: shrink(self.height, margin.vertical()),
        }
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }
}

fn offset(origin: i32, by: u32) -> i32 {
    clamp_i32(i64::from(origin) + i64::from(by))
}

fn shrink(extent: i32, by: u64) -> i32 {
    clamp_i32(i64::from(extent) - i64::try_from(by).unwrap_or(i64::MAX))
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Raw display rectangle plus margin, with the drawable rectangle derived
/// from both. The derived rectangle is recomputed on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenGeometry {
    raw_bounds: Rect,
    margin: Margin,
    effective_bounds: Rect,
}

impl ScreenGeometry {
    pub fn new(raw_bounds: Rect, margin: Margin) -> Self {
        Self {
            raw_bounds,
            margin,
            effective_bounds: Self::recompute(raw_bounds, &margin),
        }
    }

    /// Drawable rectangle of `raw_bounds` once `margin` is taken off.
    pub fn recompute(raw_bounds: Rect, margin: &Margin) -> Rect {
        raw_bounds.inset(margin)
    }

    pub fn raw_bounds(&self) -> Rect {
        self.raw_bounds
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn effective_bounds(&self) -> Rect {
        self.effective_bounds
    }

    pub fn set_raw_bounds(&mut self, raw_bounds: Rect) {
        self.raw_bounds = raw_bounds;
        self.effective_bounds = Self::recompute(self.raw_bounds, &self.margin);
    }

    pub fn set_margin(&mut self, margin: Margin) {
        self.margin = margin;
        self.effective_bounds = Self::recompute(self.raw_bounds, &self.margin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn margin_moves_origin_and_shrinks_extent() {
        let geometry = ScreenGeometry::new(Rect::new(1920, 0, 2560, 1440), Margin::new(30, 10, 20, 40));
        assert_eq!(geometry.effective_bounds(), Rect::new(1930, 30, 2530, 1370));
    }

    #[test]
    fn oversized_margin_degenerates() {
        let geometry = ScreenGeometry::new(Rect::new(0, 0, 100, 100), Margin::new(0, 60, 60, 0));
        assert_eq!(geometry.effective_bounds().width, -20);
        assert!(!geometry.effective_bounds().has_area());
    }

    #[test]
    fn setters_recompute_immediately() {
        let mut geometry = ScreenGeometry::new(Rect::new(0, 0, 800, 600), Margin::default());
        geometry.set_margin(Margin::uniform(50));
        assert_eq!(geometry.effective_bounds(), Rect::new(50, 50, 700, 500));

        geometry.set_raw_bounds(Rect::new(-1024, 0, 1024, 768));
        assert_eq!(geometry.effective_bounds(), Rect::new(-974, 50, 924, 668));
    }

    proptest! {
        #[test]
        fn effective_extent_subtracts_margin(
            x in -10_000i32..10_000,
            y in -10_000i32..10_000,
            width in 0i32..20_000,
            height in 0i32..20_000,
            top in 0u32..5_000,
            left in 0u32..5_000,
            right in 0u32..5_000,
            bottom in 0u32..5_000,
        ) {
            let margin = Margin::new(top, left, right, bottom);
            let effective = ScreenGeometry::new(Rect::new(x, y, width, height), margin).effective_bounds();
            prop_assert_eq!(i64::from(effective.width), i64::from(width) - i64::from(left) - i64::from(right));
            prop_assert_eq!(i64::from(effective.height), i64::from(height) - i64::from(top) - i64::from(bottom));
            prop_assert_eq!(i64::from(effective.x), i64::from(x) + i64::from(left));
            prop_assert_eq!(i64::from(effective.y), i64::from(y) + i64::from(top));
        }
    }
}
