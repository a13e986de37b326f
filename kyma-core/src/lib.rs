//! Board-agnostic core logic for the Kyma PWM tuner
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Pulse parameter state (frequency / duty cycle) and its button-driven
//!   transitions
//! - Timer math mapping parameters onto prescale and compare values

// std is linked only for the host test harness (proptest)
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod state;
pub mod timing;

// Re-export the most commonly used types
pub use state::{ButtonEvent, PulseParams};
pub use timing::TimerTiming;
