//! Simulated Temperature Firmware
//!
//! Runs the temperature simulator as a single embassy task on the RP2350.
//! Each second the task increments the simulated value, snaps it back to
//! the floor once the ceiling is exceeded, and logs it over RTT:
//!
//! ```text
//! [TEMP] Temperature: 26 °C
//! [TEMP] Temperature: 27 °C
//! ...
//! [TEMP] Temperature: 40 °C
//! [TEMP] Temperature: 25 °C
//! ```
//!
//! No sensor hardware is touched; the only peripherals in use are the
//! system timer (for the per-cycle delay) and RTT (for logging).

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use tempsim::adapters::{DefmtReport, EmbassyDelay};
use tempsim::{Simulator, SimulatorConfig};

/// Simulator task - the one task of this firmware, spawned once at boot
/// and expected never to return.
#[embassy_executor::task]
async fn simulator_task(config: SimulatorConfig) {
    info!(
        "Simulator task started: bounds [{=i32}, {=i32}] °C, interval {=u64} ms",
        config.floor, config.ceiling, config.interval_ms
    );

    let simulator = Simulator::new(config, EmbassyDelay, DefmtReport::new(config.tag));
    simulator.run().await;
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let _peripherals = embassy_rp::init(Default::default());

    info!("Temperature simulator firmware starting");

    spawner
        .spawn(simulator_task(SimulatorConfig::default()))
        .expect("simulator task");
}
