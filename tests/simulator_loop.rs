//! Host-side integration tests for the simulator loop
//!
//! Drives the loop through the public API with mock ports: a mock clock
//! recording requested suspensions and a mock sink collecting reported
//! values. No wall-clock waits.

use tempsim::{DelayPort, ReportPort, Simulator, SimulatorConfig};

#[derive(Default)]
struct RecordingClock {
    requested_ms: Vec<u64>,
}

impl DelayPort for RecordingClock {
    async fn delay_ms(&mut self, ms: u64) {
        self.requested_ms.push(ms);
    }
}

#[derive(Default)]
struct CollectingSink {
    lines: Vec<String>,
    values: Vec<i32>,
}

impl ReportPort for CollectingSink {
    fn report(&mut self, temperature_c: i32) {
        // Same line shape the defmt adapter emits
        self.lines.push(format!("[TEMP] Temperature: {temperature_c} °C"));
        self.values.push(temperature_c);
    }
}

async fn drive(cycles: usize) -> Simulator<RecordingClock, CollectingSink> {
    let mut sim = Simulator::new(
        SimulatorConfig::default(),
        RecordingClock::default(),
        CollectingSink::default(),
    );
    for _ in 0..cycles {
        sim.run_cycle().await;
    }
    sim
}

#[tokio::test]
async fn emits_the_documented_startup_sequence() {
    let sim = drive(17).await;
    let expected: Vec<i32> = (26..=40).chain([25, 26]).collect();
    assert_eq!(sim.reporter().values, expected);
}

#[tokio::test]
async fn formats_one_tagged_line_per_cycle() {
    let sim = drive(2).await;
    assert_eq!(
        sim.reporter().lines,
        ["[TEMP] Temperature: 26 °C", "[TEMP] Temperature: 27 °C"]
    );
}

#[tokio::test]
async fn suspends_one_second_between_reports() {
    let sim = drive(5).await;
    // One suspension per report, each at least the configured interval
    assert_eq!(sim.reporter().values.len(), sim.delay().requested_ms.len());
    assert!(sim.delay().requested_ms.iter().all(|&ms| ms >= 1000));
}

#[tokio::test]
async fn holds_the_bounds_invariant_across_many_cycles() {
    let sim = drive(500).await;
    assert!(sim.reporter().values.iter().all(|v| (25..=40).contains(v)));
}
