//! Hardware driver implementations
//!
//! This crate provides the two driver stacks of the tuner, written against
//! the traits in kyma-hal:
//!
//! - OLED display: bit-banged two-wire bus, SSD1306 protocol layer, and a
//!   text/number renderer on an 8x16 font
//! - Pulse tuner: applies button-driven parameter changes to the PWM timer

#![no_std]
#![deny(unsafe_code)]

pub mod oled;
pub mod pulse;
