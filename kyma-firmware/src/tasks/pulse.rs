//! Pulse tuning task
//!
//! Sole consumer of button events and sole owner of the timer peripheral.
//! Servicing one event runs to completion before the next is taken, so a
//! parameter change and its hardware reprogramming are never interleaved
//! with another press.

use defmt::*;

use kyma_drivers::pulse::PulseTuner;

use crate::board::PulseOutputs;
use crate::channels::{BUTTON_EVENTS, PARAMS};

#[embassy_executor::task]
pub async fn pulse_task(mut tuner: PulseTuner<PulseOutputs>) {
    info!("Pulse task started");

    // Let the display draw the power-on values
    PARAMS.signal(tuner.params());

    loop {
        let event = BUTTON_EVENTS.receive().await;
        let params = tuner.handle(event);
        info!(
            "Pulse params: {} Hz, {} %",
            params.frequency_hz(),
            params.duty_percent()
        );
        PARAMS.signal(params);
    }
}
