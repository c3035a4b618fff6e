#![forbid(unsafe_code)]

/// Corner or edge of the drawable area a text overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayPosition {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    Middle,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    #[default]
    BottomRight,
}

/// Text drawn on top of the wallpaper of one screen. The rotation never looks
/// inside; overlays travel with the assignment to whoever renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    /// Text with placeholders expanded by the renderer.
    pub format: String,
    pub font_family: String,
    pub font_size: f32,
    /// RGBA.
    pub color: [u8; 4],
    pub position: OverlayPosition,
    pub horizontal_offset: i32,
    pub vertical_offset: i32,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            format: String::new(),
            font_family: "Sans".into(),
            font_size: 12.0,
            color: [255, 255, 255, 255],
            position: OverlayPosition::default(),
            horizontal_offset: 0,
            vertical_offset: 0,
        }
    }
}

impl TextOverlay {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Default::default()
        }
    }
}
