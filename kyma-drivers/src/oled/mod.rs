//! SSD1306 OLED driver stack
//!
//! Three layers, bottom up:
//!
//! - [`bus`]: the software two-wire transport (start/stop/byte)
//! - [`display`]: command/data framing, cursor addressing, init sequence
//! - [`text`]: character and number rendering on the 8x16 [`font`]
//!
//! The whole stack is write-only and blocking; the display never talks
//! back, and each rendered cell costs its full sequence of bus
//! transactions before the call returns.

pub mod bus;
pub mod display;
pub mod font;
mod text;

pub use bus::{BitBus, TwoWireBus};
pub use display::Oled;
