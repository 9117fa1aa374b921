//! Inter-iteration pacing

use std::time::Duration;

/// Enforces a minimum delay between trace iterations
///
/// A zero pause disables the gate entirely; `wait` then returns without
/// touching the timer. The gate itself is not cancellation-aware: the
/// worker races it against the stop signal when it needs an interruptible
/// pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct PacingGate {
    pause: Duration,
}

impl PacingGate {
    /// Create a gate with the given minimum inter-iteration delay
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }

    /// Whether pacing is configured
    pub fn is_enabled(&self) -> bool {
        self.pause > Duration::ZERO
    }

    /// The configured pause
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Sleep for at least the configured pause
    pub async fn wait(&self) {
        if self.is_enabled() {
            tokio::time::sleep(self.pause).await;
        }
    }
}
