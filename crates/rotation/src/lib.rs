#![forbid(unsafe_code)]

//! Wallpaper rotation across several displays.
//!
//! Every cycle the [`CycleScheduler`] asks its [`CandidateSupplier`]s for
//! wallpapers, gives each randomly cycling screen one it has not shown
//! recently, gives each fixed screen its fixed wallpaper, and hands the
//! [`CycleAssignment`] to an [`AssignmentSink`]. The [`Rotator`] owns the
//! screen profiles and runs cycles on a periodic [`Trigger`].

mod assignment;
pub mod domain;
mod error;
pub mod pool;
mod rotator;
mod scheduler;
mod sink;
pub mod stores;
mod trigger;

pub use assignment::{CycleAssignment, ScreenAssignment};
pub use error::Error;
pub use pool::{CandidatePool, CandidatePoolRequest, CandidateSupplier, ListSupplier};
pub use rotator::{ControlEvent, Rotator};
pub use scheduler::{CycleScheduler, SchedulerState, Services};
pub use sink::{AssignmentSink, ChannelSink, CycleEvent, NoopSink};
pub use stores::{BoundedHistory, Histories};
pub use trigger::{IntervalTrigger, Trigger};
