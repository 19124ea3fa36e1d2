//! Adapters - concrete implementations of ports
//!
//! Adapters connect the domain to the outside world by implementing
//! the port traits. Each adapter knows how to work with a specific
//! technology.
//!
//! # Available Adapters
//!
//! - **embassy_delay**: timed suspension via embassy-time (feature `embassy`)
//! - **defmt_report**: tagged log sink via defmt (feature `defmt`)

#[cfg(feature = "defmt")]
pub mod defmt_report;
#[cfg(feature = "embassy")]
pub mod embassy_delay;

#[cfg(feature = "defmt")]
pub use defmt_report::DefmtReport;
#[cfg(feature = "embassy")]
pub use embassy_delay::EmbassyDelay;
