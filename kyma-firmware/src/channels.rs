//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use kyma_core::state::{ButtonEvent, PulseParams};

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Debounced button presses, consumed one at a time by the pulse task.
/// The single consumer is what guarantees presses are serviced strictly
/// in order, never reentrantly.
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Latest parameter snapshot for the display task
pub static PARAMS: Signal<CriticalSectionRawMutex, PulseParams> = Signal::new();
