//! Timer math for the pulse generator
//!
//! Maps the user-facing parameters (frequency in Hz, duty in percent) onto
//! the two values the timer peripheral actually takes: a prescale divisor
//! and a per-channel compare value. The timer counts `period + 1` ticks per
//! PWM cycle, so the tick rate must be `frequency * (period + 1)`.

/// Fixed timing configuration of the pulse generator
///
/// `base_clock_hz` is the timer's input clock (72 MHz on the target board);
/// `period` is the auto-reload value, giving `period + 1` counter ticks per
/// output cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerTiming {
    base_clock_hz: u32,
    period: u16,
}

impl TimerTiming {
    /// Create a timing configuration
    pub const fn new(base_clock_hz: u32, period: u16) -> Self {
        Self {
            base_clock_hz,
            period,
        }
    }

    /// The timer's input clock in Hz
    pub const fn base_clock_hz(&self) -> u32 {
        self.base_clock_hz
    }

    /// The auto-reload value (counter ticks per cycle minus one)
    pub const fn period(&self) -> u16 {
        self.period
    }

    /// Counter ticks per output cycle
    pub const fn ticks_per_cycle(&self) -> u32 {
        self.period as u32 + 1
    }

    /// Prescale divisor producing the requested output frequency
    ///
    /// `divisor = base_clock / (frequency * ticks_per_cycle) - 1`. The
    /// caller keeps `frequency` within the supported range, where the
    /// division is exact for the board's clock tree.
    pub const fn prescale_for(&self, frequency_hz: u16) -> u16 {
        (self.base_clock_hz / (frequency_hz as u32 * self.ticks_per_cycle()) - 1) as u16
    }

    /// Compare value producing the requested duty cycle
    ///
    /// `compare = ticks_per_cycle * duty / 100 - 1`, saturating at zero so
    /// a 0 % duty request stays inside the period bound instead of
    /// underflowing. The result never exceeds `period`.
    pub const fn compare_for(&self, duty_percent: u8) -> u16 {
        (self.ticks_per_cycle() * duty_percent as u32 / 100).saturating_sub(1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 72 MHz input clock, 2000 ticks per cycle - the target board's setup
    const TIMING: TimerTiming = TimerTiming::new(72_000_000, 1999);

    #[test]
    fn prescale_for_each_selectable_frequency() {
        assert_eq!(TIMING.prescale_for(50), 719);
        assert_eq!(TIMING.prescale_for(100), 359);
        assert_eq!(TIMING.prescale_for(150), 239);
        assert_eq!(TIMING.prescale_for(200), 179);
    }

    #[test]
    fn compare_spans_the_period() {
        assert_eq!(TIMING.compare_for(0), 0);
        assert_eq!(TIMING.compare_for(1), 19);
        assert_eq!(TIMING.compare_for(50), 999);
        assert_eq!(TIMING.compare_for(100), 1999);
    }

    #[test]
    fn ticks_per_cycle_is_period_plus_one() {
        assert_eq!(TIMING.ticks_per_cycle(), 2000);
    }

    proptest! {
        /// The compare value must never leave the period bound, for any
        /// selectable duty and any plausible period.
        #[test]
        fn compare_stays_within_period(duty in 0u8..=100, period in 1u16..=u16::MAX) {
            let timing = TimerTiming::new(72_000_000, period);
            prop_assert!(timing.compare_for(duty) <= period);
        }

        /// Higher duty never produces a lower compare value.
        #[test]
        fn compare_is_monotonic(duty in 0u8..100) {
            prop_assert!(TIMING.compare_for(duty) <= TIMING.compare_for(duty + 1));
        }
    }
}
