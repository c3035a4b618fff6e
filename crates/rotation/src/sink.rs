#![forbid(unsafe_code)]

use crate::assignment::CycleAssignment;
use crate::error::Error;
use flume::{Sender, TrySendError};
use tracing::warn;

pub trait AssignmentSink: Send + Sync {
    /// Render or place the wallpapers of a finished cycle.
    fn assigned(&self, assignment: &CycleAssignment);

    /// A cycle was skipped without touching any screen.
    fn skipped(&self, _cycle_id: u64, _reason: &Error) {}
}

#[derive(Debug, Default)]
pub struct NoopSink;

impl AssignmentSink for NoopSink {
    fn assigned(&self, _assignment: &CycleAssignment) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleEvent {
    Assigned(CycleAssignment),
    Skipped { cycle_id: u64, reason: String },
}

/// Forwards cycle outcomes to a channel, for a renderer living on another
/// task.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<CycleEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<CycleEvent>) -> Self {
        Self { tx }
    }

    fn forward(&self, event: CycleEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(?event, "cycle event dropped, receiver is lagging");
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("cycle event dropped, receiver is gone");
            }
        }
    }
}

impl AssignmentSink for ChannelSink {
    fn assigned(&self, assignment: &CycleAssignment) {
        self.forward(CycleEvent::Assigned(assignment.clone()));
    }

    fn skipped(&self, cycle_id: u64, reason: &Error) {
        self.forward(CycleEvent::Skipped {
            cycle_id,
            reason: reason.to_string(),
        });
    }
}
