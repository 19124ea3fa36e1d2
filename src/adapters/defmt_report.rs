//! defmt log sink adapter
//!
//! Implements the ReportPort trait by emitting one defmt info line per
//! reading, prefixed with a fixed tag.

use crate::ports::report::ReportPort;

/// Log sink emitting readings via `defmt::info!`.
///
/// Line format: `[TAG] Temperature: <value> °C`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DefmtReport {
    /// Tag identifying this sink in the log stream
    tag: &'static str,
}

impl DefmtReport {
    /// Create a new defmt report sink with the given tag
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }

    /// Get the tag this sink reports under
    pub const fn tag(&self) -> &'static str {
        self.tag
    }
}

impl ReportPort for DefmtReport {
    fn report(&mut self, temperature_c: i32) {
        defmt::info!("[{=str}] Temperature: {=i32} °C", self.tag, temperature_c);
    }
}
