//! The periodic simulator loop
//!
//! One cycle: advance the counter, report the new value, suspend for the
//! configured interval. The loop runs as a single cooperative task and is
//! designed to run until the device is reset.

use crate::domain::SimulatedTemperature;
use crate::ports::{DelayPort, ReportPort};

/// Configuration for the simulator loop
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimulatorConfig {
    /// Inclusive minimum value in degrees Celsius
    pub floor: i32,
    /// Inclusive maximum value in degrees Celsius
    pub ceiling: i32,
    /// Suspension between cycles (milliseconds)
    pub interval_ms: u64,
    /// Tag identifying the loop's reports in the log stream
    pub tag: &'static str,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            floor: 25,
            ceiling: 40,
            interval_ms: 1000, // 1-second delay
            tag: "TEMP",
        }
    }
}

impl SimulatorConfig {
    /// Create a config with custom bounds and interval
    pub const fn new(floor: i32, ceiling: i32, interval_ms: u64, tag: &'static str) -> Self {
        Self {
            floor,
            ceiling,
            interval_ms,
            tag,
        }
    }

    /// Create a config for rapid cycling (demos, bench runs)
    pub const fn fast() -> Self {
        Self {
            floor: 25,
            ceiling: 40,
            interval_ms: 100, // 100ms
            tag: "TEMP",
        }
    }
}

/// The temperature simulator loop.
///
/// Owns the counter and both ports; no state is shared across task
/// boundaries. `run` never returns under normal operation.
pub struct Simulator<D, R> {
    temperature: SimulatedTemperature,
    interval_ms: u64,
    delay: D,
    report: R,
}

impl<D: DelayPort, R: ReportPort> Simulator<D, R> {
    /// Create a new simulator from a config and concrete ports
    pub fn new(config: SimulatorConfig, delay: D, report: R) -> Self {
        Self {
            temperature: SimulatedTemperature::new(config.floor, config.ceiling),
            interval_ms: config.interval_ms,
            delay,
            report,
        }
    }

    /// Run one cycle: advance, report, suspend.
    pub async fn run_cycle(&mut self) {
        let value = self.temperature.advance();
        self.report.report(value);
        self.delay.delay_ms(self.interval_ms).await;
    }

    /// Run the loop forever. Never returns under normal operation.
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
        }
    }

    /// Get the current temperature value (for diagnostics)
    pub const fn temperature(&self) -> i32 {
        self.temperature.value()
    }

    /// Get the delay port (for diagnostics)
    pub const fn delay(&self) -> &D {
        &self.delay
    }

    /// Get the report sink (for diagnostics)
    pub const fn reporter(&self) -> &R {
        &self.report
    }
}
