//! Character and number rendering
//!
//! Draws into a 4-line x 16-column text grid of 8x16 cells. Lines and
//! columns are 1-based, matching the panel silkscreen on the dev board's
//! documentation. Digit extraction is positional (most significant first)
//! with leading zeros kept; values wider than the requested digit count
//! truncate to the low-order digits.

use super::bus::TwoWireBus;
use super::display::Oled;
use super::font;

/// Integer power by repeated multiplication
fn pow(base: u32, exponent: u32) -> u32 {
    let mut result = 1;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

impl<B: TwoWireBus> Oled<B> {
    /// Draw one character at text cell (`line` 1..=4, `column` 1..=16)
    pub fn show_char(&mut self, line: u8, column: u8, ch: char) {
        let page = (line - 1) * 2;
        let x = (column - 1) * 8;
        let glyph = font::glyph(ch);

        self.set_cursor(page, x);
        for &byte in &glyph[..8] {
            self.write_data(byte);
        }
        self.set_cursor(page + 1, x);
        for &byte in &glyph[8..] {
            self.write_data(byte);
        }
    }

    /// Draw a string left to right from `column`, one cell per character.
    ///
    /// No wrapping: characters past column 16 land off the addressable
    /// grid and the panel ignores them.
    pub fn show_str(&mut self, line: u8, column: u8, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.show_char(line, column + i as u8, ch);
        }
    }

    /// Draw an unsigned decimal number, `digits` (1..=10) wide
    pub fn show_unsigned(&mut self, line: u8, column: u8, number: u32, digits: u8) {
        for i in 0..digits {
            let digit = number / pow(10, (digits - 1 - i) as u32) % 10;
            self.show_char(line, column + i, (b'0' + digit as u8) as char);
        }
    }

    /// Draw a signed decimal number: sign cell, then `digits` magnitude cells
    pub fn show_signed(&mut self, line: u8, column: u8, number: i32, digits: u8) {
        let sign = if number >= 0 { '+' } else { '-' };
        self.show_char(line, column, sign);

        let magnitude = number.unsigned_abs();
        for i in 0..digits {
            let digit = magnitude / pow(10, (digits - 1 - i) as u32) % 10;
            self.show_char(line, column + i + 1, (b'0' + digit as u8) as char);
        }
    }

    /// Draw a hexadecimal number, `digits` (1..=8) wide, uppercase
    pub fn show_hex(&mut self, line: u8, column: u8, number: u32, digits: u8) {
        for i in 0..digits {
            let nibble = number / pow(16, (digits - 1 - i) as u32) % 16;
            let ch = if nibble < 10 {
                b'0' + nibble as u8
            } else {
                b'A' + nibble as u8 - 10
            };
            self.show_char(line, column + i, ch as char);
        }
    }

    /// Draw a binary number, `digits` (1..=16) wide
    pub fn show_binary(&mut self, line: u8, column: u8, number: u32, digits: u8) {
        for i in 0..digits {
            let bit = number / pow(2, (digits - 1 - i) as u32) % 2;
            self.show_char(line, column + i, (b'0' + bit as u8) as char);
        }
    }
}
