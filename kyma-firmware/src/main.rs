//! Kyma - PWM Waveform Tuner
//!
//! Main firmware binary for STM32F103 "Blue Pill" class boards.
//!
//! Two push-buttons tune the waveform on TIM2's four output channels: one
//! steps the frequency (50 Hz steps, 50-200 Hz, wrapping), the other steps
//! the duty cycle (1 % steps, 0-100 %, wrapping). A 128x64 SSD1306 OLED on
//! a bit-banged two-wire bus shows the live values.
//!
//! Named after the Greek "kyma" (κύμα) meaning "wave".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use {defmt_rtt as _, panic_probe as _};

use kyma_core::state::PulseParams;
use kyma_core::timing::TimerTiming;
use kyma_drivers::pulse::PulseTuner;

use crate::board::{BusPin, PulseOutputs};

mod board;
mod channels;
mod tasks;

/// TIM2 input clock with the 72 MHz clock tree (see [`board::clock_config`])
const TIMER_CLOCK_HZ: u32 = 72_000_000;
/// TIM2 auto-reload value: 2000 counter ticks per PWM cycle
const TIMER_PERIOD: u16 = 1999;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kyma firmware starting...");

    let p = embassy_stm32::init(board::clock_config());
    info!("Peripherals initialized, sysclk 72 MHz");

    // Buttons, active low with internal pull-ups
    let frequency_button = ExtiInput::new(p.PB1, p.EXTI1, Pull::Up);
    let duty_button = ExtiInput::new(p.PB10, p.EXTI10, Pull::Up);

    // Software display bus: PB13 = SCL, PB15 = SDA, idle high
    let scl = BusPin::new(Output::new(p.PB13, Level::High, Speed::VeryHigh));
    let sda = BusPin::new(Output::new(p.PB15, Level::High, Speed::VeryHigh));

    // TIM2 channels 1-4 on PA0-PA3
    let timing = TimerTiming::new(TIMER_CLOCK_HZ, TIMER_PERIOD);
    let outputs = PulseOutputs::new(p.TIM2, p.PA0, p.PA1, p.PA2, p.PA3, timing);
    let tuner = PulseTuner::new(outputs, timing, PulseParams::default());
    info!(
        "Pulse generator running: {} Hz, {} %",
        tuner.params().frequency_hz(),
        tuner.params().duty_percent()
    );

    unwrap!(spawner.spawn(tasks::frequency_button_task(frequency_button)));
    unwrap!(spawner.spawn(tasks::duty_button_task(duty_button)));
    unwrap!(spawner.spawn(tasks::pulse_task(tuner)));
    unwrap!(spawner.spawn(tasks::display_task(scl, sda)));
}
