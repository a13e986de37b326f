//! Software two-wire serial bus
//!
//! Bit-bangs an I2C-shaped write-only protocol over two push-pull GPIO
//! lines. The display controller never drives the data line back, so the
//! acknowledgment slot is clocked but not sampled and no error can be
//! observed at this layer.

use kyma_hal::gpio::OutputPin;

/// Transport primitive used by the display protocol layer
///
/// Separating the transport behind a trait keeps the protocol and
/// rendering layers testable against a recording fake.
pub trait TwoWireBus {
    /// Emit a start condition (data falls while clock is high)
    fn start(&mut self);

    /// Emit a stop condition (data rises while clock is high)
    fn stop(&mut self);

    /// Shift out one byte, MSB first, then clock the unsampled ack slot
    fn send_byte(&mut self, byte: u8);
}

/// Bit-banged bus over two output lines
///
/// Transition timing is whatever the GPIO writes take; the SSD1306 keeps
/// up with anything a Cortex-M3 can toggle, so no explicit delays are
/// inserted.
pub struct BitBus<SCL, SDA> {
    scl: SCL,
    sda: SDA,
}

impl<SCL: OutputPin, SDA: OutputPin> BitBus<SCL, SDA> {
    /// Take ownership of the two bus lines and release them to idle (high)
    pub fn new(scl: SCL, sda: SDA) -> Self {
        let mut bus = Self { scl, sda };
        bus.scl.set_high();
        bus.sda.set_high();
        bus
    }

    /// Pulse the clock line high then low, latching the current data bit
    fn clock_pulse(&mut self) {
        self.scl.set_high();
        self.scl.set_low();
    }
}

impl<SCL: OutputPin, SDA: OutputPin> TwoWireBus for BitBus<SCL, SDA> {
    fn start(&mut self) {
        self.sda.set_high();
        self.scl.set_high();
        self.sda.set_low();
        self.scl.set_low();
    }

    fn stop(&mut self) {
        self.sda.set_low();
        self.scl.set_high();
        self.sda.set_high();
    }

    fn send_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            // Data line must be stable before the clock rises
            self.sda.set_state(byte & (0x80 >> bit) != 0);
            self.clock_pulse();
        }
        // Ninth clock for the acknowledgment slot; the ack is never read
        self.clock_pulse();
    }
}
