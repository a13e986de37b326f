//! Display task
//!
//! Owns the OLED driver stack. Draws the static layout once, then
//! refreshes the value fields whenever the pulse task publishes a new
//! snapshot. Rendering is blocking bit-banged I/O, but it only ever runs
//! inside this task.

use defmt::*;
use embassy_time::Timer;

use kyma_drivers::oled::{BitBus, Oled};

use crate::board::BusPin;
use crate::channels::PARAMS;

/// SSD1306 power-on settle time before the init sequence may run
const POWER_ON_DELAY_MS: u64 = 100;

#[embassy_executor::task]
pub async fn display_task(scl: BusPin, sda: BusPin) {
    info!("Display task started");

    Timer::after_millis(POWER_ON_DELAY_MS).await;

    let mut oled = Oled::new(BitBus::new(scl, sda));
    oled.init();
    info!("Display initialized");

    // Static layout; value fields are overwritten in place below
    oled.show_str(1, 1, "Kyma PWM tuner");
    oled.show_str(2, 1, "Freq:");
    oled.show_str(2, 10, "Hz");
    oled.show_str(3, 1, "Duty:");
    oled.show_str(3, 10, "%");

    loop {
        let params = PARAMS.wait().await;
        oled.show_unsigned(2, 7, params.frequency_hz() as u32, 3);
        oled.show_unsigned(3, 7, params.duty_percent() as u32, 3);
    }
}
