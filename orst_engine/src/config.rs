//! Per-run settings.

use std::time::Duration;

/// Settings fixed for the whole of one sort invocation.
///
/// # Usage
///```
/// use orst_engine::RunConfig;
/// use std::time::Duration;
///
/// let config = RunConfig::new().with_delay_ms(50).with_seed(7);
/// assert_eq!(config.delay(), Duration::from_millis(50));
/// assert_eq!(config.seed(), Some(7));
/// assert_eq!(config.bogo_budget(), None);
///```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    delay: Duration,
    bogo_budget: Option<u64>,
    seed: Option<u64>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time the engine waits after every step. Zero still yields to the scheduler once per step.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_delay_ms(self, millis: u64) -> Self {
        self.with_delay(Duration::from_millis(millis))
    }

    /// Caps the number of shuffle rounds bogo sort may take. Other algorithms ignore it.
    pub fn with_bogo_budget(mut self, rounds: u64) -> Self {
        self.bogo_budget = Some(rounds);
        self
    }

    /// Seeds the shuffle source so bogo sort runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn bogo_budget(&self) -> Option<u64> {
        self.bogo_budget
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
