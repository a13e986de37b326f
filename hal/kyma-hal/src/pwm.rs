//! PWM timer abstractions
//!
//! Models the pulse-generator peripheral as a prescaled counter with four
//! compare channels. Peripheral bring-up (pin muxing, clock enable, counting
//! mode) stays in the chip-specific implementation; the tuner logic only
//! needs the operations below.

/// One of the four output compare channels of the pulse generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseChannel {
    Ch1,
    Ch2,
    Ch3,
    Ch4,
}

impl PulseChannel {
    /// All channels, in hardware order
    pub const ALL: [PulseChannel; 4] = [
        PulseChannel::Ch1,
        PulseChannel::Ch2,
        PulseChannel::Ch3,
        PulseChannel::Ch4,
    ];
}

/// Four-channel PWM pulse generator
///
/// The prescale divisor sets the counter's tick rate from the timer's input
/// clock; each channel's compare value sets where within the period its
/// output toggles. Note that hardware latches prescale writes at the next
/// counter overflow, so a caller that needs the new divisor immediately must
/// restart the channels (see the pulse tuner).
pub trait PulseGenerator {
    /// Write the prescale divisor (tick rate = input clock / (divisor + 1))
    fn set_prescale(&mut self, divisor: u16);

    /// Write a channel's compare value
    fn set_compare(&mut self, channel: PulseChannel, value: u16);

    /// Enable a channel's output
    fn start_channel(&mut self, channel: PulseChannel);

    /// Disable a channel's output
    fn stop_channel(&mut self, channel: PulseChannel);
}
