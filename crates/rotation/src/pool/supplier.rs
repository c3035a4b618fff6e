#![forbid(unsafe_code)]

use crate::domain::Image;
use crate::pool::CandidatePoolRequest;
use parking_lot::RwLock;
use std::sync::Arc;

pub trait CandidateSupplier: Send + Sync {
    /// Offer wallpapers for the coming cycle. Must return promptly; any
    /// discovery I/O has to happen before the request is issued.
    fn supply(&self, request: &mut CandidatePoolRequest);
}

/// Supplies whatever list it currently holds. Clones share the list, so the
/// owner of one handle can swap the wallpapers the rotation sees.
#[derive(Debug, Clone, Default)]
pub struct ListSupplier(Arc<RwLock<Vec<Image>>>);

impl ListSupplier {
    pub fn new(images: Vec<Image>) -> Self {
        Self(Arc::new(RwLock::new(images)))
    }

    pub fn replace(&self, images: Vec<Image>) {
        *self.0.write() = images;
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl CandidateSupplier for ListSupplier {
    fn supply(&self, request: &mut CandidatePoolRequest) {
        request.offer_all(self.0.read().iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_list() {
        let supplier = ListSupplier::new(vec![Image::new("/a")]);
        let handle = supplier.clone();
        handle.replace(vec![Image::new("/b"), Image::new("/c")]);

        let mut request = CandidatePoolRequest::new();
        supplier.supply(&mut request);
        assert_eq!(request.len(), 2);
    }
}
