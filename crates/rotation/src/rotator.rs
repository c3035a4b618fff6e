#![forbid(unsafe_code)]

use crate::assignment::CycleAssignment;
use crate::domain::{Rect, ScreenProfile};
use crate::error::Error;
use crate::scheduler::{CycleScheduler, SchedulerState, Services};
use crate::trigger::Trigger;
use config::Config;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Requests a running rotator accepts between cycles.
#[derive(Debug)]
pub enum ControlEvent {
    Start,
    Pause,
    Stop,
    /// Run a cycle right away, whatever the state.
    CycleNow,
    /// Replace the screen profiles, e.g. after an edit session was committed.
    Reconfigure(Vec<ScreenProfile>),
    /// Displays were attached, detached or moved.
    Displays(Vec<Rect>),
    Reload(Config),
}

/// Owns the screen profiles and drives the scheduler from the trigger.
pub struct Rotator {
    config: Config,
    displays: Vec<Rect>,
    profiles: Vec<ScreenProfile>,
    scheduler: CycleScheduler,
    trigger: Box<dyn Trigger>,
}

impl Rotator {
    pub fn new(
        config: Config,
        displays: Vec<Rect>,
        scheduler: CycleScheduler,
        trigger: Box<dyn Trigger>,
    ) -> Result<Self, Error> {
        let profiles = Self::profiles_from_config(&config, &displays, &[])?;
        Ok(Self {
            config,
            displays,
            profiles,
            scheduler,
            trigger,
        })
    }

    /// Build the scheduler from `services` and wrap it.
    pub fn with_services(
        config: Config,
        displays: Vec<Rect>,
        services: Services,
        trigger: Box<dyn Trigger>,
    ) -> Result<Self, Error> {
        let scheduler = CycleScheduler::new(&config, services)?;
        Self::new(config, displays, scheduler, trigger)
    }

    /// One profile per display, taking overlays over from `previous`.
    fn profiles_from_config(
        config: &Config,
        displays: &[Rect],
        previous: &[ScreenProfile],
    ) -> Result<Vec<ScreenProfile>, Error> {
        let mut profiles = Vec::with_capacity(displays.len());
        for index in 0..displays.len() {
            let mut profile = ScreenProfile::from_config(&config.screen(index), displays)?;
            if let Some(old) = previous.iter().find(|old| old.index() == profile.index()) {
                *profile.overlays_mut() = old.overlays().to_vec();
            }
            profiles.push(profile);
        }
        Ok(profiles)
    }

    pub fn profiles(&self) -> &[ScreenProfile] {
        &self.profiles
    }

    pub fn scheduler(&self) -> &CycleScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut CycleScheduler {
        &mut self.scheduler
    }

    /// Run one cycle. A skipped cycle yields `None` and is not an error.
    pub fn tick(&mut self) -> Result<Option<CycleAssignment>, Error> {
        match self.scheduler.run_cycle(&self.profiles) {
            Ok(assignment) => Ok(Some(assignment)),
            Err(err) if err.is_cycle_skip() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Cycle on the trigger while running, until `cancel` fires.
    ///
    /// The next cycle is due one interval after the previous periodic cycle,
    /// or after the rotation was (re)started. Control events in between do
    /// not move the deadline.
    pub async fn run_until(
        &mut self,
        cancel: CancellationToken,
        mut control_rx: mpsc::UnboundedReceiver<ControlEvent>,
    ) -> Result<(), Error> {
        if self.config.rotation.autostart {
            self.scheduler.start();
        }
        let mut next_due = Instant::now() + self.config.rotation.interval;

        loop {
            let running = self.scheduler.state() == SchedulerState::Running;
            let remaining = next_due.saturating_duration_since(Instant::now());
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                Some(event) = control_rx.recv() => {
                    self.handle_control(event)?;
                    if !running && self.scheduler.state() == SchedulerState::Running {
                        next_due = Instant::now() + self.config.rotation.interval;
                    }
                }
                _ = self.trigger.wait(remaining), if running => {
                    self.tick()?;
                    next_due = Instant::now() + self.config.rotation.interval;
                }
            }
        }

        Ok(())
    }

    fn handle_control(&mut self, event: ControlEvent) -> Result<(), Error> {
        debug!(?event, "control event");
        match event {
            ControlEvent::Start => {
                self.scheduler.start();
            }
            ControlEvent::Pause => {
                self.scheduler.pause();
            }
            ControlEvent::Stop => self.scheduler.stop(),
            ControlEvent::CycleNow => {
                self.tick()?;
            }
            ControlEvent::Reconfigure(profiles) => {
                let mut seen = HashSet::new();
                if let Some(dup) = profiles.iter().find(|p| !seen.insert(p.index())) {
                    warn!(screen = %dup.index(), "ignoring profiles with a duplicated screen");
                    return Ok(());
                }
                self.profiles = profiles;
                info!(screens = self.profiles.len(), "profiles replaced");
            }
            ControlEvent::Displays(displays) => self.apply_displays(displays),
            ControlEvent::Reload(config) => {
                if let Err(err) = self.apply_reload(config) {
                    warn!(%err, "ignoring invalid configuration");
                } else {
                    info!("config reloaded");
                }
            }
        }
        Ok(())
    }

    /// Refresh bounds of existing screens, drop vanished ones and add a
    /// default profile for every new display.
    fn apply_displays(&mut self, displays: Vec<Rect>) {
        let mut profiles = Vec::with_capacity(displays.len());
        for mut profile in std::mem::take(&mut self.profiles) {
            match profile.refresh_bounds(&displays) {
                Ok(()) => profiles.push(profile),
                Err(err) => warn!(screen = %profile.index(), %err, "display detached"),
            }
        }

        let known: HashSet<_> = profiles.iter().map(|p| p.index().get()).collect();
        for index in (0..displays.len()).filter(|index| !known.contains(index)) {
            match ScreenProfile::from_config(&self.config.screen(index), &displays) {
                Ok(profile) => profiles.push(profile),
                Err(err) => warn!(screen = index, %err, "skipping new display"),
            }
        }
        profiles.sort_by_key(ScreenProfile::index);

        info!(screens = profiles.len(), "displays changed");
        self.displays = displays;
        self.profiles = profiles;
    }

    fn apply_reload(&mut self, config: Config) -> Result<(), Error> {
        let profiles = Self::profiles_from_config(&config, &self.displays, &self.profiles)?;
        self.scheduler.reconfigure(&config)?;
        self.profiles = profiles;
        self.config = config;
        Ok(())
    }
}
