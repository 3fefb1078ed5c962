//! Simulated upload progress.
//!
//! The backend gives no progress signal for an upload request, so the
//! indicator is cosmetic: it creeps forward on a timer while the request is
//! pending and jumps to 100 when it resolves. It never reflects bytes sent.

use rand::Rng;

/// Tick period of the simulator
pub const DEFAULT_TICK_MS: u64 = 300;

/// Upper bound (exclusive) of a single random step
pub const MAX_INCREMENT: f64 = 30.0;

/// Highest value reachable while the request is still pending
pub const PENDING_CEILING: f64 = 89.0;

/// Value reported once the request resolved successfully
pub const COMPLETE: f64 = 100.0;

/// Draw one random step, uniform in `[0, MAX_INCREMENT)`.
pub fn random_increment<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..MAX_INCREMENT)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressSimulator {
    value: f64,
    running: bool,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new submission at 0
    pub fn start(&mut self) {
        self.value = 0.0;
        self.running = true;
    }

    /// Advance by `increment`, clamped to the pending ceiling.
    ///
    /// Ignored once the simulator stopped. Returns whether the tick applied.
    pub fn tick(&mut self, increment: f64) -> bool {
        if !self.running {
            return false;
        }
        let step = increment.clamp(0.0, MAX_INCREMENT);
        self.value = (self.value + step).min(PENDING_CEILING);
        true
    }

    /// Request succeeded: force 100 and stop
    pub fn complete(&mut self) {
        self.value = COMPLETE;
        self.running = false;
    }

    /// Request failed: back to 0 and stop
    pub fn fail(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.running = false;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole percent for display
    pub fn percent(&self) -> u16 {
        self.value.floor() as u16
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
