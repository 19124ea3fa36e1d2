//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the domain interacts with external
//! systems. They allow the domain to remain independent of specific
//! implementations.
//!
//! # Hexagonal Architecture
//!
//! In hexagonal architecture, ports define the "holes" in the hexagon where
//! adapters plug in:
//!
//! - **DelayPort**: How the loop suspends between cycles (RTOS timer, mock clock)
//! - **ReportPort**: How readings reach the outside world (defmt, mock sink)

pub mod delay;
pub mod report;

pub use delay::DelayPort;
pub use report::ReportPort;
