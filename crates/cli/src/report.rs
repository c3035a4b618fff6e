use rotation::{AssignmentSink, CycleAssignment, Error};
use tracing::{info, warn};

/// Reports every assignment through the log instead of touching the desktop.
#[derive(Debug, Default)]
pub struct LogSink;

impl AssignmentSink for LogSink {
    fn assigned(&self, assignment: &CycleAssignment) {
        for (screen, placed) in assignment.iter() {
            info!(
                cycle = assignment.cycle_id,
                %screen,
                image = %placed.image.key(),
                placement = %placed.image.placement,
                bounds = ?placed.bounds,
                overlays = placed.overlays.len(),
                random = placed.randomly_selected,
                "wallpaper assigned"
            );
        }
    }

    fn skipped(&self, cycle_id: u64, reason: &Error) {
        warn!(cycle = cycle_id, %reason, "no wallpaper change");
    }
}
