#![forbid(unsafe_code)]

use super::ImageKey;
use config::Placement;
use educe::Educe;
use std::path::PathBuf;

/// A wallpaper as handed around by collaborators.
///
/// Equality and hashing only look at the key; the placement is carried along
/// for the consumer that renders the assignment.
#[derive(Clone, Default, Educe)]
#[educe(Debug, PartialEq, Eq, Hash)]
pub struct Image {
    pub key: ImageKey,

    #[educe(Eq(ignore), Hash(ignore))]
    pub placement: Placement,
}

impl Image {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            key: ImageKey::new(path),
            placement: Placement::default(),
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn key(&self) -> &ImageKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_placement() {
        let a = Image::new("/walls/a.jpg").with_placement(Placement::Tile);
        let b = Image::new("/walls/a.jpg").with_placement(Placement::Center);
        assert_eq!(a, b);
        assert_ne!(a, Image::new("/walls/b.jpg"));

        let distinct: HashSet<_> = [a, b, Image::new("/walls/b.jpg")].into_iter().collect();
        assert_eq!(distinct.len(), 2);
    }
}
