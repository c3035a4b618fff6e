#![forbid(unsafe_code)]

use crate::domain::ImageKey;
use crate::error::Error;
use std::collections::VecDeque;

/// The most recent wallpapers of a rotation, oldest first.
///
/// Pushing onto a full history evicts the oldest entry, so the history is
/// always the last `capacity` pushes in order. Entries can only be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedHistory {
    capacity: usize,
    entries: VecDeque<ImageKey>,
}

impl BoundedHistory {
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        })
    }

    /// An empty history with the same capacity.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            capacity: self.capacity,
            entries: VecDeque::with_capacity(self.capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. Shrinking below the current length drops the
    /// oldest entries.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), Error> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }

        if self.entries.len() > capacity {
            let overflow = self.entries.len() - capacity;
            self.entries.drain(..overflow);
            self.entries.shrink_to_fit();
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn push(&mut self, image: ImageKey) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(image);
    }

    pub fn push_all(&mut self, images: impl IntoIterator<Item = ImageKey>) {
        for image in images {
            self.push(image);
        }
    }

    pub fn contains(&self, image: &ImageKey) -> bool {
        self.entries.contains(image)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Most recently pushed entry.
    pub fn newest(&self) -> Option<&ImageKey> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageKey> {
        self.entries.iter()
    }
}
