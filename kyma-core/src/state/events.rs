//! Events that trigger parameter transitions
//!
//! Each event represents exactly one logical, already-debounced button
//! press. Debounce happens upstream in the firmware's button tasks, so the
//! handler never sees bounce trains.

/// A single debounced button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The frequency button was pressed (step frequency by 50 Hz)
    FrequencyPressed,
    /// The duty cycle button was pressed (step duty by 1 %)
    DutyCyclePressed,
}
