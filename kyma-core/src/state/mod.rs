//! Pulse parameter state machine
//!
//! The tunable state is one composite value (frequency + duty cycle);
//! transitions are triggered only by the two button events. Wrapping is
//! explicit and deterministic.

pub mod events;
pub mod params;

pub use events::ButtonEvent;
pub use params::PulseParams;
