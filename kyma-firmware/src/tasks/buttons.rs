//! Button input tasks
//!
//! One task per button. Each waits for a falling edge on its EXTI line,
//! debounces with a short delay plus a level re-check, and forwards a
//! single event per press. Downstream code can therefore treat every
//! event as one clean, already-debounced press.

use defmt::*;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Level;
use embassy_time::{Duration, Timer};

use kyma_core::state::ButtonEvent;

use crate::channels::BUTTON_EVENTS;

/// Settle time after an edge before the level re-check
const DEBOUNCE: Duration = Duration::from_millis(30);

async fn debounced_presses(button: &mut ExtiInput<'static>, event: ButtonEvent) {
    loop {
        button.wait_for_falling_edge().await;

        Timer::after(DEBOUNCE).await;
        if button.get_level() != Level::Low {
            continue; // Bounce, not a press
        }

        debug!("button press: {}", event);
        BUTTON_EVENTS.send(event).await;

        // One event per press: swallow the release and its bounce
        button.wait_for_rising_edge().await;
        Timer::after(DEBOUNCE).await;
    }
}

/// Frequency button (PB1 / EXTI1)
#[embassy_executor::task]
pub async fn frequency_button_task(mut button: ExtiInput<'static>) {
    info!("Frequency button task started");
    debounced_presses(&mut button, ButtonEvent::FrequencyPressed).await;
}

/// Duty cycle button (PB10 / EXTI10)
#[embassy_executor::task]
pub async fn duty_button_task(mut button: ExtiInput<'static>) {
    info!("Duty cycle button task started");
    debounced_presses(&mut button, ButtonEvent::DutyCyclePressed).await;
}
