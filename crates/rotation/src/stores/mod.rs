#![forbid(unsafe_code)]

mod bounded_history;

pub use bounded_history::BoundedHistory;

use crate::domain::ScreenIndex;
use crate::error::Error;
use config::HistoryScope;
use std::collections::HashMap;

/// Recent-wallpaper windows of the rotation, one per screen or one shared by
/// all screens depending on the scope.
#[derive(Debug, Clone)]
pub struct Histories {
    scope: HistoryScope,
    capacity: usize,
    shared: BoundedHistory,
    per_screen: HashMap<ScreenIndex, BoundedHistory>,
}

impl Histories {
    pub fn new(scope: HistoryScope, capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            scope,
            capacity,
            shared: BoundedHistory::new(capacity)?,
            per_screen: HashMap::new(),
        })
    }

    pub fn from_config(history: &config::History) -> Result<Self, Error> {
        Self::new(history.scope, history.capacity)
    }

    pub fn scope(&self) -> HistoryScope {
        self.scope
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The window consulted and updated for `screen`.
    pub fn stream_mut(&mut self, screen: ScreenIndex) -> &mut BoundedHistory {
        match self.scope {
            HistoryScope::Shared => &mut self.shared,
            HistoryScope::PerScreen => self
                .per_screen
                .entry(screen)
                .or_insert_with(|| self.shared.empty_like()),
        }
    }

    pub fn stream(&self, screen: ScreenIndex) -> Option<&BoundedHistory> {
        match self.scope {
            HistoryScope::Shared => Some(&self.shared),
            HistoryScope::PerScreen => self.per_screen.get(&screen),
        }
    }

    /// Resize every window. Shrinking drops the oldest entries.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), Error> {
        self.shared.set_capacity(capacity)?;
        for history in self.per_screen.values_mut() {
            history.set_capacity(capacity)?;
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Switch scope. Windows of the old scope are discarded.
    pub fn set_scope(&mut self, scope: HistoryScope) {
        if scope != self.scope {
            self.scope = scope;
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.shared.clear();
        self.per_screen.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.per_screen.values().all(BoundedHistory::is_empty)
    }
}
