use std::fmt::Display;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use kiosk_logging::kiosk_warn;

/// Fixed-delay retry policy for the joke-fetch and rating-log paths.
///
/// The production policy is unbounded: the appliance has no fallback UI
/// for total endpoint failure, so it sits in the retry loop until the
/// endpoint comes back. That makes a permanently dead endpoint an
/// availability hazard, accepted for this device. Tests inject
/// [`RetryPolicy::bounded`] with a zero delay instead of waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<NonZeroU32>,
}

impl RetryPolicy {
    /// Fixed inter-attempt delay of the production policy.
    pub const FIXED_DELAY: Duration = Duration::from_secs(2);

    pub fn forever() -> Self {
        Self {
            delay: Self::FIXED_DELAY,
            max_attempts: None,
        }
    }

    pub fn bounded(max_attempts: u32, delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: NonZeroU32::new(max_attempts),
        }
    }

    /// Runs `op` until it succeeds or the attempt budget is spent.
    /// Every error kind is treated identically: warn and go again.
    pub(crate) fn run<T, E: Display>(
        &self,
        what: &str,
        mut op: impl FnMut() -> Result<T, E>,
    ) -> Result<T, Exhausted<E>> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    kiosk_warn!(
                        "[{}] attempt {} failed: {}; retrying in {:?}",
                        what,
                        attempts,
                        err,
                        self.delay
                    );
                    if let Some(max) = self.max_attempts {
                        if attempts >= max.get() {
                            return Err(Exhausted {
                                attempts,
                                last: err,
                            });
                        }
                    }
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::forever()
    }
}

/// A bounded policy ran out of attempts; carries the final error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhausted<E> {
    pub attempts: u32,
    pub last: E,
}
