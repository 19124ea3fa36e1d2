//! Delay port - abstraction for timed suspension
//!
//! This trait allows the simulator loop to yield control for a fixed
//! duration without knowing the specific scheduler implementation
//! (embassy-time, FreeRTOS-style tick delay, mock clock, etc.)

/// Port for suspending the current task for a duration.
///
/// The suspension primitive is assumed infallible: the underlying scheduler
/// resumes the caller after at least the requested duration has elapsed.
/// No retries, no error paths.
///
/// # Example Implementation
///
/// ```ignore
/// struct EmbassyDelay;
///
/// impl DelayPort for EmbassyDelay {
///     async fn delay_ms(&mut self, ms: u64) {
///         embassy_time::Timer::after_millis(ms).await;
///     }
/// }
/// ```
pub trait DelayPort {
    /// Suspend execution for at least `ms` milliseconds.
    ///
    /// During the suspension the scheduler may run other tasks; the future
    /// resolves once the requested duration has elapsed.
    fn delay_ms(&mut self, ms: u64) -> impl core::future::Future<Output = ()>;
}
