//! Kyma Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the driver and core crates are
//! written against. The firmware binary implements them on top of the chip
//! HAL; host tests implement them with recording fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (kyma-firmware)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kyma-drivers (OLED stack, pulse tuner) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kyma-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output lines (the bit-banged display bus)
//! - [`pwm::PulseGenerator`] - The four-channel PWM timer peripheral

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use pwm::{PulseChannel, PulseGenerator};
