//! Pulse tuner
//!
//! Owns the pulse parameters and translates button events into timer
//! reprogramming. Frequency changes rewrite the prescale divisor and then
//! restart every channel - the timer latches prescale writes at the next
//! overflow, so without the stop/start cycle the old frequency would run
//! until the current period expires. Duty changes rewrite the compare
//! values in place; those take effect without glitching.

use kyma_core::state::{ButtonEvent, PulseParams};
use kyma_core::timing::TimerTiming;
use kyma_hal::pwm::{PulseChannel, PulseGenerator};

/// Button-driven tuner for a four-channel PWM timer
pub struct PulseTuner<G> {
    generator: G,
    timing: TimerTiming,
    params: PulseParams,
}

impl<G: PulseGenerator> PulseTuner<G> {
    /// Create a tuner and program the generator with the initial parameters
    pub fn new(generator: G, timing: TimerTiming, params: PulseParams) -> Self {
        let mut tuner = Self {
            generator,
            timing,
            params,
        };
        tuner.apply_frequency();
        tuner.apply_duty();
        tuner
    }

    /// Current parameter snapshot
    pub fn params(&self) -> PulseParams {
        self.params
    }

    /// Service one debounced button press and return the new parameters
    pub fn handle(&mut self, event: ButtonEvent) -> PulseParams {
        self.params.apply(event);
        match event {
            ButtonEvent::FrequencyPressed => self.apply_frequency(),
            ButtonEvent::DutyCyclePressed => self.apply_duty(),
        }
        self.params
    }

    /// Reprogram the prescaler and force it live by restarting all channels
    fn apply_frequency(&mut self) {
        let prescale = self.timing.prescale_for(self.params.frequency_hz());
        self.generator.set_prescale(prescale);
        for channel in PulseChannel::ALL {
            self.generator.stop_channel(channel);
        }
        for channel in PulseChannel::ALL {
            self.generator.start_channel(channel);
        }
    }

    /// Rewrite every channel's compare value; no restart needed
    fn apply_duty(&mut self) {
        let compare = self.timing.compare_for(self.params.duty_percent());
        for channel in PulseChannel::ALL {
            self.generator.set_compare(channel, compare);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Prescale(u16),
        Compare(PulseChannel, u16),
        Start(PulseChannel),
        Stop(PulseChannel),
    }

    /// Recording fake for the generator seam
    #[derive(Default)]
    struct RecordingGenerator {
        ops: Vec<Op, 64>,
    }

    impl PulseGenerator for RecordingGenerator {
        fn set_prescale(&mut self, divisor: u16) {
            self.ops.push(Op::Prescale(divisor)).unwrap();
        }

        fn set_compare(&mut self, channel: PulseChannel, value: u16) {
            self.ops.push(Op::Compare(channel, value)).unwrap();
        }

        fn start_channel(&mut self, channel: PulseChannel) {
            self.ops.push(Op::Start(channel)).unwrap();
        }

        fn stop_channel(&mut self, channel: PulseChannel) {
            self.ops.push(Op::Stop(channel)).unwrap();
        }
    }

    const TIMING: TimerTiming = TimerTiming::new(72_000_000, 1999);

    fn tuner_at(frequency_hz: u16, duty_percent: u8) -> PulseTuner<RecordingGenerator> {
        let mut tuner = PulseTuner::new(
            RecordingGenerator::default(),
            TIMING,
            PulseParams::new(frequency_hz, duty_percent),
        );
        tuner.generator.ops.clear();
        tuner
    }

    use PulseChannel::*;

    #[test]
    fn construction_programs_initial_state() {
        let tuner = PulseTuner::new(
            RecordingGenerator::default(),
            TIMING,
            PulseParams::new(50, 50),
        );

        let ops = &tuner.generator.ops;
        assert_eq!(ops[0], Op::Prescale(719));
        // Restart cycle, then the four compare writes
        assert_eq!(ops.len(), 1 + 8 + 4);
        assert!(ops[9..].iter().all(|op| *op == Op::Compare(Ch1, 999)
            || *op == Op::Compare(Ch2, 999)
            || *op == Op::Compare(Ch3, 999)
            || *op == Op::Compare(Ch4, 999)));
    }

    #[test]
    fn frequency_press_reprograms_prescale_and_restarts_all_channels() {
        let mut tuner = tuner_at(100, 50);

        let params = tuner.handle(ButtonEvent::FrequencyPressed);

        assert_eq!(params.frequency_hz(), 150);
        assert_eq!(
            tuner.generator.ops.as_slice(),
            &[
                Op::Prescale(239),
                Op::Stop(Ch1),
                Op::Stop(Ch2),
                Op::Stop(Ch3),
                Op::Stop(Ch4),
                Op::Start(Ch1),
                Op::Start(Ch2),
                Op::Start(Ch3),
                Op::Start(Ch4),
            ]
        );
    }

    #[test]
    fn frequency_wrap_lands_back_on_lowest_prescale() {
        let mut tuner = tuner_at(200, 0);

        let params = tuner.handle(ButtonEvent::FrequencyPressed);

        assert_eq!(params.frequency_hz(), 50);
        assert_eq!(tuner.generator.ops[0], Op::Prescale(719));
    }

    #[test]
    fn duty_press_rewrites_compares_without_restart() {
        let mut tuner = tuner_at(50, 49);

        let params = tuner.handle(ButtonEvent::DutyCyclePressed);

        assert_eq!(params.duty_percent(), 50);
        assert_eq!(
            tuner.generator.ops.as_slice(),
            &[
                Op::Compare(Ch1, 999),
                Op::Compare(Ch2, 999),
                Op::Compare(Ch3, 999),
                Op::Compare(Ch4, 999),
            ]
        );
    }

    #[test]
    fn duty_wrap_drops_compare_to_floor() {
        let mut tuner = tuner_at(50, 100);

        let params = tuner.handle(ButtonEvent::DutyCyclePressed);

        assert_eq!(params.duty_percent(), 0);
        assert_eq!(tuner.generator.ops[0], Op::Compare(Ch1, 0));
    }

    #[test]
    fn presses_interleave_without_cross_talk() {
        let mut tuner = tuner_at(50, 0);

        tuner.handle(ButtonEvent::DutyCyclePressed);
        tuner.handle(ButtonEvent::FrequencyPressed);
        tuner.handle(ButtonEvent::DutyCyclePressed);

        let params = tuner.params();
        assert_eq!(params.frequency_hz(), 100);
        assert_eq!(params.duty_percent(), 2);
    }
}
