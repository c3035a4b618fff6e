#![forbid(unsafe_code)]

use std::time::Duration;

/// Source of the periodic cycle tick.
#[async_trait::async_trait]
pub trait Trigger: Send + Sync {
    /// Resolve once `remaining` has elapsed and the next cycle is due.
    async fn wait(&self, remaining: Duration);
}

#[derive(Debug, Default)]
pub struct IntervalTrigger;

#[async_trait::async_trait]
impl Trigger for IntervalTrigger {
    async fn wait(&self, remaining: Duration) {
        tokio::time::sleep(remaining).await;
    }
}
