#![forbid(unsafe_code)]

mod request;
mod supplier;

pub use request::{CandidatePool, CandidatePoolRequest, DEFAULT_CAPACITY_HINT};
pub use supplier::{CandidateSupplier, ListSupplier};
