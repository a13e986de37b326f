//! Tunable pulse parameters
//!
//! One owned state object holds both parameters; the event handler borrows
//! it mutably for the duration of a press, which keeps mutation and the
//! matching hardware reprogramming atomic with respect to everything else.

use super::events::ButtonEvent;

/// Lowest selectable frequency, in Hz
pub const FREQUENCY_MIN_HZ: u16 = 50;
/// Highest selectable frequency, in Hz
pub const FREQUENCY_MAX_HZ: u16 = 200;
/// Frequency change per button press, in Hz
pub const FREQUENCY_STEP_HZ: u16 = 50;
/// Highest selectable duty cycle, in percent
pub const DUTY_MAX_PERCENT: u8 = 100;

/// The tunable waveform parameters
///
/// Frequency stays in `[50, 200]` Hz in 50 Hz steps and wraps back to 50
/// when stepped past 200. Duty cycle stays in `[0, 100]` percent in 1 %
/// steps and wraps back to 0 when stepped past 100. The two fields are
/// independent; no transition touches both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseParams {
    frequency_hz: u16,
    duty_percent: u8,
}

impl PulseParams {
    /// Create parameters at specific values
    pub const fn new(frequency_hz: u16, duty_percent: u8) -> Self {
        Self {
            frequency_hz,
            duty_percent,
        }
    }

    /// Current frequency in Hz
    pub fn frequency_hz(&self) -> u16 {
        self.frequency_hz
    }

    /// Current duty cycle in percent
    pub fn duty_percent(&self) -> u8 {
        self.duty_percent
    }

    /// Advance frequency by one step, wrapping above the maximum.
    ///
    /// Returns the new frequency.
    pub fn step_frequency(&mut self) -> u16 {
        self.frequency_hz += FREQUENCY_STEP_HZ;
        if self.frequency_hz > FREQUENCY_MAX_HZ {
            self.frequency_hz = FREQUENCY_MIN_HZ;
        }
        self.frequency_hz
    }

    /// Advance duty cycle by one step, wrapping above the maximum.
    ///
    /// Returns the new duty cycle.
    pub fn step_duty(&mut self) -> u8 {
        self.duty_percent += 1;
        if self.duty_percent > DUTY_MAX_PERCENT {
            self.duty_percent = 0;
        }
        self.duty_percent
    }

    /// Apply one button event and return the updated parameters
    pub fn apply(&mut self, event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::FrequencyPressed => {
                self.step_frequency();
            }
            ButtonEvent::DutyCyclePressed => {
                self.step_duty();
            }
        }
        *self
    }
}

impl Default for PulseParams {
    /// Power-on defaults: 50 Hz, 50 % duty
    fn default() -> Self {
        Self::new(FREQUENCY_MIN_HZ, 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_steps_through_range_and_wraps() {
        let mut params = PulseParams::new(50, 0);

        assert_eq!(params.step_frequency(), 100);
        assert_eq!(params.step_frequency(), 150);
        assert_eq!(params.step_frequency(), 200);
        assert_eq!(params.step_frequency(), 50);
    }

    #[test]
    fn frequency_step_from_each_value() {
        for (from, to) in [(50, 100), (100, 150), (150, 200), (200, 50)] {
            let mut params = PulseParams::new(from, 0);
            assert_eq!(params.step_frequency(), to);
            assert_eq!(params.frequency_hz(), to);
        }
    }

    #[test]
    fn duty_increments_below_max() {
        for duty in 0..DUTY_MAX_PERCENT {
            let mut params = PulseParams::new(50, duty);
            assert_eq!(params.step_duty(), duty + 1);
        }
    }

    #[test]
    fn duty_wraps_at_max() {
        let mut params = PulseParams::new(50, DUTY_MAX_PERCENT);
        assert_eq!(params.step_duty(), 0);
    }

    #[test]
    fn events_touch_only_their_field() {
        let mut params = PulseParams::new(100, 30);

        params.apply(ButtonEvent::FrequencyPressed);
        assert_eq!(params.frequency_hz(), 150);
        assert_eq!(params.duty_percent(), 30);

        params.apply(ButtonEvent::DutyCyclePressed);
        assert_eq!(params.frequency_hz(), 150);
        assert_eq!(params.duty_percent(), 31);
    }

    #[test]
    fn full_duty_cycle_lap_returns_to_start() {
        let mut params = PulseParams::default();
        let start = params.duty_percent();

        for _ in 0..=DUTY_MAX_PERCENT {
            params.apply(ButtonEvent::DutyCyclePressed);
        }

        assert_eq!(params.duty_percent(), start);
    }
}
