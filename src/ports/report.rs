//! Report port - abstraction for the log sink
//!
//! This trait allows the simulator loop to emit readings without knowing
//! the specific logging facility (defmt over RTT, a serial console, a mock
//! sink collecting values in tests).

/// Port for reporting a temperature value to an external log sink.
///
/// A report is fire-and-forget: the sink accepts a line of text with the
/// embedded value and no response is consumed. The sink identifies itself
/// with a fixed tag; which tag is the adapter's concern.
pub trait ReportPort {
    /// Emit one report containing the current value in degrees Celsius.
    fn report(&mut self, temperature_c: i32);
}
