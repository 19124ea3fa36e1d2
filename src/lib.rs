//! Simulated Temperature Firmware Library
//!
//! This library provides a hexagonal architecture for a minimal firmware
//! sample: a single periodic task that simulates a temperature reading and
//! logs it once per second.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - SimulatedTemperature entity (bounded counter)                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - DelayPort: timed suspension between cycles                   │
//! │  - ReportPort: emit a reading to a log sink                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - EmbassyDelay: embassy-time Timer                             │
//! │  - DefmtReport: defmt log sink with a fixed tag                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Benefits
//!
//! - **Testable** - Ports allow mocking the clock and the log sink, so the
//!   loop's value sequence and timing are verified on the host without
//!   hardware or wall-clock waits
//! - **Extensible** - Easy to retarget another HAL by implementing DelayPort

#![cfg_attr(not(test), no_std)]

/// Domain layer - pure business logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

/// The periodic simulator loop and its configuration
pub mod simulator;

// Re-export key domain types
pub use domain::SimulatedTemperature;

// Re-export key port traits
pub use ports::{DelayPort, ReportPort};

// Re-export the loop and its configuration
pub use simulator::{Simulator, SimulatorConfig};
