#![forbid(unsafe_code)]

use crate::assignment::{CycleAssignment, ScreenAssignment};
use crate::domain::{Image, ScreenIndex, ScreenProfile};
use crate::error::Error;
use crate::pool::{CandidatePool, CandidatePoolRequest, CandidateSupplier};
use crate::sink::AssignmentSink;
use crate::stores::Histories;
use config::Config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

/// Collaborators of the scheduler.
pub struct Services {
    /// Asked in order for wallpapers before every cycle.
    pub suppliers: Vec<Box<dyn CandidateSupplier>>,
    pub sink: Box<dyn AssignmentSink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Stopped,
    /// Cycling on the periodic trigger.
    Running,
    /// Trigger suspended; histories kept.
    Paused,
}

pub struct CycleScheduler {
    state: SchedulerState,
    histories: Histories,
    keep_history_on_stop: bool,
    pool_capacity_hint: usize,
    services: Services,
    rng: StdRng,
    cycle_id: u64,
}

impl CycleScheduler {
    /// Create a stopped scheduler with an OS-seeded generator.
    pub fn new(config: &Config, services: Services) -> Result<Self, Error> {
        Self::with_rng(config, services, StdRng::from_os_rng())
    }

    pub fn with_rng(config: &Config, services: Services, rng: StdRng) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            state: SchedulerState::Stopped,
            histories: Histories::from_config(&config.history)?,
            keep_history_on_stop: config.history.keep_on_stop,
            pool_capacity_hint: config.rotation.pool_capacity_hint,
            services,
            rng,
            cycle_id: 0,
        })
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn histories(&self) -> &Histories {
        &self.histories
    }

    pub fn histories_mut(&mut self) -> &mut Histories {
        &mut self.histories
    }

    /// Number of cycles attempted so far, skipped ones included.
    pub fn cycle_id(&self) -> u64 {
        self.cycle_id
    }

    /// Stopped/Paused -> Running. Returns whether the state changed.
    pub fn start(&mut self) -> bool {
        if self.state == SchedulerState::Running {
            return false;
        }
        info!(from = ?self.state, "rotation started");
        self.state = SchedulerState::Running;
        true
    }

    /// Running -> Paused. Histories are kept.
    pub fn pause(&mut self) -> bool {
        if self.state != SchedulerState::Running {
            debug!(state = ?self.state, "pause ignored, rotation is not running");
            return false;
        }
        info!("rotation paused");
        self.state = SchedulerState::Paused;
        true
    }

    /// Any state -> Stopped. Histories are cleared unless configured to
    /// survive a stop.
    pub fn stop(&mut self) {
        if !self.keep_history_on_stop {
            self.histories.clear();
        }
        info!(from = ?self.state, kept_history = self.keep_history_on_stop, "rotation stopped");
        self.state = SchedulerState::Stopped;
    }

    /// Apply history and pool settings of a reloaded configuration.
    pub fn reconfigure(&mut self, config: &Config) -> Result<(), Error> {
        config.validate()?;
        self.histories.set_scope(config.history.scope);
        self.histories.set_capacity(config.history.capacity)?;
        self.keep_history_on_stop = config.history.keep_on_stop;
        self.pool_capacity_hint = config.rotation.pool_capacity_hint;
        Ok(())
    }

    /// Ask every supplier for wallpapers and close the request.
    pub fn request_pool(&self) -> Result<CandidatePool, Error> {
        let mut request = CandidatePoolRequest::with_capacity(self.pool_capacity_hint);
        for supplier in &self.services.suppliers {
            supplier.supply(&mut request);
        }
        trace!(%request, "candidate pool collected");
        request.finish()
    }

    /// Run one cycle over `profiles` and hand the result to the sink.
    ///
    /// An empty pool skips the cycle: no assignment is emitted and no history
    /// changes. The scheduler state is never touched by a cycle.
    pub fn run_cycle(&mut self, profiles: &[ScreenProfile]) -> Result<CycleAssignment, Error> {
        self.cycle_id = self.cycle_id.saturating_add(1);
        let span = tracing::debug_span!("cycle", id = self.cycle_id);
        let _enter = span.enter();

        Self::check_unique(profiles)?;

        let pool = match self.request_pool() {
            Ok(pool) => pool,
            Err(err) => {
                warn!(%err, "cycle skipped");
                self.services.sink.skipped(self.cycle_id, &err);
                return Err(err);
            }
        };

        let assignment = self.assign(profiles, &pool)?;
        self.services.sink.assigned(&assignment);
        Ok(assignment)
    }

    /// Select a wallpaper for every profile from `pool`, updating histories
    /// of randomly cycling screens.
    pub fn assign(
        &mut self,
        profiles: &[ScreenProfile],
        pool: &CandidatePool,
    ) -> Result<CycleAssignment, Error> {
        Self::check_unique(profiles)?;

        let mut assignment = CycleAssignment::new(self.cycle_id);
        for profile in profiles {
            let screen = profile.index();
            trace!(%screen, random = profile.cycle_randomly(), "selecting");

            let screen_assignment = if profile.cycle_randomly() {
                let image = self.select(screen, pool);
                ScreenAssignment::new(profile, profile.place(image), true)
            } else {
                ScreenAssignment::new(profile, profile.fixed_image().clone(), false)
            };

            debug!(%screen, image = %screen_assignment.image.key, "assigned");
            assignment.insert(screen, screen_assignment);
        }

        Ok(assignment)
    }

    /// Pick uniformly among pool entries missing from the screen's history,
    /// or among the whole pool when every entry was shown recently.
    fn select(&mut self, screen: ScreenIndex, pool: &CandidatePool) -> Image {
        let history = self.histories.stream_mut(screen);
        let images = pool.images();

        let eligible: Vec<usize> = images
            .iter()
            .enumerate()
            .filter(|(_, image)| !history.contains(image.key()))
            .map(|(index, _)| index)
            .collect();

        let index = if eligible.is_empty() {
            trace!(%screen, pool = images.len(), "every candidate shown recently, using whole pool");
            self.rng.random_range(0..images.len())
        } else {
            eligible[self.rng.random_range(0..eligible.len())]
        };

        let image = images[index].clone();
        history.push(image.key.clone());
        image
    }

    fn check_unique(profiles: &[ScreenProfile]) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in profiles {
            if !seen.insert(profile.index()) {
                return Err(Error::DuplicateScreen(profile.index()));
            }
        }
        Ok(())
    }
}
