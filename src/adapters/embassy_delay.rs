//! Embassy timer adapter
//!
//! Implements the DelayPort trait on top of embassy-time, yielding the
//! task back to the executor until the requested duration has elapsed.

use crate::ports::delay::DelayPort;
use embassy_time::Timer;

/// Timed suspension via the embassy time driver.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyDelay;

impl DelayPort for EmbassyDelay {
    async fn delay_ms(&mut self, ms: u64) {
        Timer::after_millis(ms).await;
    }
}
