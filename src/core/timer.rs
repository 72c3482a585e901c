use async_trait::async_trait;
use std::time::Duration;

/// Delay the presentation layer shows while the itinerary is "being generated"
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(3000);

/// Boundary timer awaited between `submit` and `resolve`.
///
/// The delay is purely cosmetic; the session never depends on how long it takes.
#[async_trait]
pub trait ThinkingTimer: Send + Sync + std::fmt::Debug {
    async fn wait(&self);
}

/// Sleeps on the tokio clock
#[derive(Debug, Clone)]
pub struct DelayTimer {
    delay: Duration,
}

impl DelayTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelayTimer {
    fn default() -> Self {
        Self::new(DEFAULT_THINKING_DELAY)
    }
}

#[async_trait]
impl ThinkingTimer for DelayTimer {
    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Returns at once
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTimer;

#[async_trait]
impl ThinkingTimer for ImmediateTimer {
    async fn wait(&self) {}
}
