#![forbid(unsafe_code)]

use crate::domain::Image;
use crate::error::Error;
use itertools::Itertools;
use std::fmt;

/// Initial room reserved for contributions when no hint is configured.
pub const DEFAULT_CAPACITY_HINT: usize = 50;

/// Collects the wallpapers suppliers offer for the coming cycle.
#[derive(Debug, Clone)]
pub struct CandidatePoolRequest {
    candidates: Vec<Image>,
}

impl Default for CandidatePoolRequest {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_HINT)
    }
}

impl CandidatePoolRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(hint: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(hint),
        }
    }

    pub fn offer(&mut self, image: Image) {
        self.candidates.push(image);
    }

    pub fn offer_all(&mut self, images: impl IntoIterator<Item = Image>) {
        self.candidates.extend(images);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Close the request. Wallpapers offered more than once are kept once,
    /// at their first position.
    pub fn finish(self) -> Result<CandidatePool, Error> {
        if self.candidates.is_empty() {
            return Err(Error::EmptyCandidatePool);
        }
        Ok(CandidatePool {
            images: self.candidates.into_iter().unique().collect(),
        })
    }
}

impl fmt::Display for CandidatePoolRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallpapers: {}", self.candidates.len())
    }
}

/// Distinct, non-empty set of wallpapers a cycle selects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    images: Vec<Image>,
}

impl CandidatePool {
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; an empty request never becomes a pool.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
