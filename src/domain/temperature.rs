//! Simulated temperature domain entity
//!
//! This module defines the bounded counter that stands in for a real
//! temperature sensor. Each cycle the value climbs by one degree and snaps
//! back to the floor once the ceiling is exceeded.

/// A simulated temperature value in degrees Celsius.
///
/// The value is owned exclusively by the simulator loop; it is mutated in
/// place once per cycle and stays within `[floor, ceiling]` at every
/// externally observable point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimulatedTemperature {
    /// Current value in degrees Celsius
    value: i32,
    /// Inclusive minimum the value may hold
    floor: i32,
    /// Inclusive maximum the value may hold
    ceiling: i32,
}

impl SimulatedTemperature {
    /// Create a new simulated temperature starting at the floor
    pub const fn new(floor: i32, ceiling: i32) -> Self {
        debug_assert!(floor <= ceiling);
        Self {
            value: floor,
            floor,
            ceiling,
        }
    }

    /// Create a simulated temperature resuming from a known value
    pub const fn with_value(value: i32, floor: i32, ceiling: i32) -> Self {
        debug_assert!(floor <= value && value <= ceiling);
        Self {
            value,
            floor,
            ceiling,
        }
    }

    /// Advance one cycle and return the new value.
    ///
    /// The increment always happens before the bound check, and the reset is
    /// a hard snap to the floor rather than a wraparound: with bounds
    /// `[25, 40]`, the value after 40 is 25, never 26. Starting from the
    /// floor, the observed sequence is `26, 27, ..., 40, 25, 26, ...` with
    /// no repeated and no skipped value.
    pub fn advance(&mut self) -> i32 {
        self.value += 1;
        if self.value > self.ceiling {
            self.value = self.floor;
        }
        self.value
    }

    /// Get the current value in degrees Celsius
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Get the inclusive lower bound
    pub const fn floor(&self) -> i32 {
        self.floor
    }

    /// Get the inclusive upper bound
    pub const fn ceiling(&self) -> i32 {
        self.ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_reports_floor_plus_one() {
        let mut temp = SimulatedTemperature::new(25, 40);
        assert_eq!(temp.advance(), 26);
    }

    #[test]
    fn test_ceiling_snaps_to_floor() {
        let mut temp = SimulatedTemperature::with_value(40, 25, 40);
        // Hard snap: 41 becomes 25, not 26
        assert_eq!(temp.advance(), 25);
    }

    #[test]
    fn test_sequence_has_no_gaps_or_repeats() {
        let mut temp = SimulatedTemperature::new(25, 40);
        let mut previous = temp.value();
        for _ in 0..64 {
            let current = temp.advance();
            if previous < temp.ceiling() {
                assert_eq!(current, previous + 1);
            } else {
                assert_eq!(current, temp.floor());
            }
            previous = current;
        }
    }

    #[test]
    fn test_value_stays_within_bounds() {
        let mut temp = SimulatedTemperature::new(25, 40);
        for _ in 0..100 {
            let value = temp.advance();
            assert!((25..=40).contains(&value));
        }
    }

    #[test]
    fn test_period_is_ceiling_minus_floor_plus_one() {
        let mut temp = SimulatedTemperature::new(25, 40);
        let first = temp.advance();
        let mut after_period = first;
        for _ in 0..16 {
            after_period = temp.advance();
        }
        // 16 values cover [25, 40] exactly once, then the cycle repeats
        assert_eq!(after_period, first);
    }
}
