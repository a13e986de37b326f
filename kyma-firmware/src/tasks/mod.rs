//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod display;
pub mod pulse;

pub use buttons::{duty_button_task, frequency_button_task};
pub use display::display_task;
pub use pulse::pulse_task;
