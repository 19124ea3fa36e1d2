//! Domain layer - pure business logic independent of infrastructure
//!
//! This module contains the core domain entity of the simulator: a bounded
//! temperature counter. It has no knowledge of how values are reported or
//! how time passes between cycles.

pub mod temperature;

pub use temperature::SimulatedTemperature;
