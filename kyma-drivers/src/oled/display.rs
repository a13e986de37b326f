//! SSD1306 protocol layer
//!
//! Frames bus transactions into command and data writes and maintains the
//! controller's page/column cursor addressing. 128x64 panel: 8 pages of
//! 128 column bytes, 8 pixels tall each.

use super::bus::TwoWireBus;

/// Address byte for the display: 7-bit address 0x3C with the write bit
pub const DISPLAY_ADDRESS: u8 = 0x78;

/// Control byte selecting a command write
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte selecting a data write
const CONTROL_DATA: u8 = 0x40;

/// Pages (8-pixel-tall rows) in display memory
pub const PAGES: u8 = 8;
/// Column bytes per page
pub const COLUMNS: u8 = 128;

/// SSD1306 command bytes
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// SSD1306 display over a two-wire bus
///
/// All writes are fire-and-forget; the panel cannot report errors, so
/// every method is infallible and correctness rests on the framing and the
/// fixed init ordering below.
pub struct Oled<B> {
    bus: B,
}

impl<B: TwoWireBus> Oled<B> {
    /// Wrap a bus; the display is untouched until [`Oled::init`]
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Borrow the underlying bus (rendering tests inspect the fake)
    #[cfg(test)]
    pub(crate) fn bus(&self) -> &B {
        &self.bus
    }

    /// Write one command byte
    pub fn write_command(&mut self, command: u8) {
        self.bus.start();
        self.bus.send_byte(DISPLAY_ADDRESS);
        self.bus.send_byte(CONTROL_COMMAND);
        self.bus.send_byte(command);
        self.bus.stop();
    }

    /// Write one data (pixel column) byte at the cursor, advancing it
    pub fn write_data(&mut self, data: u8) {
        self.bus.start();
        self.bus.send_byte(DISPLAY_ADDRESS);
        self.bus.send_byte(CONTROL_DATA);
        self.bus.send_byte(data);
        self.bus.stop();
    }

    /// Move the cursor to `page` (0..=7), column byte `column` (0..=127)
    pub fn set_cursor(&mut self, page: u8, column: u8) {
        self.write_command(cmd::SET_PAGE_ADDR | (page & 0x07));
        self.write_command(cmd::SET_HIGH_COLUMN | ((column & 0xF0) >> 4));
        self.write_command(cmd::SET_LOW_COLUMN | (column & 0x0F));
    }

    /// Blank the entire surface
    pub fn clear(&mut self) {
        for page in 0..PAGES {
            self.set_cursor(page, 0);
            for _ in 0..COLUMNS {
                self.write_data(0x00);
            }
        }
    }

    /// Run the panel's power-up command sequence, then clear.
    ///
    /// The ordering is mandated by the controller's power-up sequencing;
    /// reordering leaves the panel blank or garbled. The caller must wait
    /// out the panel's power-on delay before calling this.
    pub fn init(&mut self) {
        const INIT_SEQUENCE: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Suggested ratio
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_SEG_REMAP,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &command in INIT_SEQUENCE {
            self.write_command(command);
        }

        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use heapless::Vec;

    /// Everything a transaction can do at the bus seam
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BusOp {
        Start,
        Byte(u8),
        Stop,
    }

    /// Recording fake for the transport seam
    #[derive(Default)]
    pub struct RecordingBus {
        pub ops: Vec<BusOp, 8192>,
    }

    impl TwoWireBus for RecordingBus {
        fn start(&mut self) {
            self.ops.push(BusOp::Start).unwrap();
        }

        fn stop(&mut self) {
            self.ops.push(BusOp::Stop).unwrap();
        }

        fn send_byte(&mut self, byte: u8) {
            self.ops.push(BusOp::Byte(byte)).unwrap();
        }
    }

    /// Bus fake that models the controller's memory, so rendering tests
    /// can assert on what ends up in the framebuffer. Only the cursor
    /// commands are interpreted; multi-byte config commands (init
    /// sequence) must not be replayed through this fake.
    pub struct FramebufferBus {
        pub memory: [[u8; COLUMNS as usize]; PAGES as usize],
        page: usize,
        column: usize,
        transaction: Vec<u8, 4>,
        in_transaction: bool,
    }

    impl Default for FramebufferBus {
        fn default() -> Self {
            Self {
                memory: [[0xAA; COLUMNS as usize]; PAGES as usize],
                page: 0,
                column: 0,
                transaction: Vec::new(),
                in_transaction: false,
            }
        }
    }

    impl FramebufferBus {
        fn apply(&mut self) {
            assert_eq!(self.transaction.len(), 3, "transaction must be 3 bytes");
            assert_eq!(self.transaction[0], DISPLAY_ADDRESS);
            let payload = self.transaction[2];
            match self.transaction[1] {
                CONTROL_COMMAND => match payload {
                    0xB0..=0xB7 => self.page = (payload & 0x07) as usize,
                    0x10..=0x1F => {
                        self.column = (self.column & 0x0F) | (((payload & 0x0F) as usize) << 4)
                    }
                    0x00..=0x0F => self.column = (self.column & 0xF0) | (payload & 0x0F) as usize,
                    _ => {} // Config commands don't touch the cursor
                },
                CONTROL_DATA => {
                    self.memory[self.page][self.column] = payload;
                    self.column = (self.column + 1) % COLUMNS as usize;
                }
                other => panic!("bad control byte {:#04x}", other),
            }
        }
    }

    impl TwoWireBus for FramebufferBus {
        fn start(&mut self) {
            assert!(!self.in_transaction, "start inside open transaction");
            self.in_transaction = true;
            self.transaction.clear();
        }

        fn stop(&mut self) {
            assert!(self.in_transaction, "stop without start");
            self.apply();
            self.in_transaction = false;
        }

        fn send_byte(&mut self, byte: u8) {
            assert!(self.in_transaction, "byte outside transaction");
            self.transaction.push(byte).unwrap();
        }
    }

    #[test]
    fn command_write_frames_one_transaction() {
        let mut oled = Oled::new(RecordingBus::default());
        oled.write_command(0xAE);

        assert_eq!(
            oled.bus.ops.as_slice(),
            &[
                BusOp::Start,
                BusOp::Byte(DISPLAY_ADDRESS),
                BusOp::Byte(0x00),
                BusOp::Byte(0xAE),
                BusOp::Stop,
            ]
        );
    }

    #[test]
    fn data_write_uses_data_control_byte() {
        let mut oled = Oled::new(RecordingBus::default());
        oled.write_data(0x5A);

        assert_eq!(
            oled.bus.ops.as_slice(),
            &[
                BusOp::Start,
                BusOp::Byte(DISPLAY_ADDRESS),
                BusOp::Byte(0x40),
                BusOp::Byte(0x5A),
                BusOp::Stop,
            ]
        );
    }

    #[test]
    fn set_cursor_splits_column_into_nibbles() {
        let mut oled = Oled::new(RecordingBus::default());
        oled.set_cursor(3, 0x6B);

        // Each transaction is exactly 5 ops; the payload is the 4th
        let payloads: Vec<u8, 8> = oled
            .bus
            .ops
            .chunks(5)
            .map(|t| match t[3] {
                BusOp::Byte(b) => b,
                _ => unreachable!(),
            })
            .collect();
        // Page select, high nibble, low nibble
        assert_eq!(payloads.as_slice(), &[0xB3, 0x16, 0x0B]);
    }

    #[test]
    fn clear_blanks_every_page() {
        let mut oled = Oled::new(FramebufferBus::default());
        oled.clear();

        for page in oled.bus.memory.iter() {
            assert!(page.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn init_ends_with_panel_on_and_clear() {
        let mut oled = Oled::new(RecordingBus::default());
        oled.init();

        let commands: Vec<u8, 64> = oled
            .bus
            .ops
            .chunks(5)
            .filter(|t| t[2] == BusOp::Byte(0x00))
            .map(|t| match t[3] {
                BusOp::Byte(b) => b,
                _ => unreachable!(),
            })
            .collect();

        // First command powers the panel down, the 23rd turns it back on;
        // everything after is the cursor addressing for clear().
        assert_eq!(commands[0], 0xAE);
        assert_eq!(commands[22], 0xAF);
        assert_eq!(commands[23], 0xB0);
    }
}
