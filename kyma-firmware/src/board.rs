//! Board wiring for the STM32F103C8 target
//!
//! Clock tree configuration and the concrete implementations of the
//! kyma-hal traits on top of embassy-stm32.

use embassy_stm32::gpio::{Output, OutputType};
use embassy_stm32::peripherals::{PA0, PA1, PA2, PA3, TIM2};
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::low_level::{CountingMode, OutputCompareMode, Timer};
use embassy_stm32::timer::simple_pwm::PwmPin;
use embassy_stm32::timer::{Ch1, Ch2, Ch3, Ch4, Channel as HwChannel};
use embassy_stm32::{Config, Peri};

use kyma_core::timing::TimerTiming;
use kyma_hal::gpio::OutputPin;
use kyma_hal::pwm::{PulseChannel, PulseGenerator};

/// 72 MHz clock tree: 8 MHz HSE x9 PLL, APB1 at 36 MHz (so the APB1 timer
/// clock doubles back to 72 MHz for TIM2)
pub fn clock_config() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    config
}

/// One line of the software display bus
pub struct BusPin {
    pin: Output<'static>,
}

impl BusPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for BusPin {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// TIM2 with channels 1-4 as the pulse generator
///
/// Bring-up (pin muxing, counting mode, compare mode, period) happens in
/// [`PulseOutputs::new`]; afterwards the tuner drives the peripheral
/// exclusively through the [`PulseGenerator`] trait.
pub struct PulseOutputs {
    tim: Timer<'static, TIM2>,
    _pins: (
        PwmPin<'static, TIM2, Ch1>,
        PwmPin<'static, TIM2, Ch2>,
        PwmPin<'static, TIM2, Ch3>,
        PwmPin<'static, TIM2, Ch4>,
    ),
}

impl PulseOutputs {
    pub fn new(
        tim: Peri<'static, TIM2>,
        ch1: Peri<'static, PA0>,
        ch2: Peri<'static, PA1>,
        ch3: Peri<'static, PA2>,
        ch4: Peri<'static, PA3>,
        timing: TimerTiming,
    ) -> Self {
        let pins = (
            PwmPin::new_ch1(ch1, OutputType::PushPull),
            PwmPin::new_ch2(ch2, OutputType::PushPull),
            PwmPin::new_ch3(ch3, OutputType::PushPull),
            PwmPin::new_ch4(ch4, OutputType::PushPull),
        );

        let tim = Timer::new(tim);
        tim.set_counting_mode(CountingMode::EdgeAlignedUp);
        tim.regs_gp16().arr().write(|w| w.set_arr(timing.period()));
        for channel in [
            HwChannel::Ch1,
            HwChannel::Ch2,
            HwChannel::Ch3,
            HwChannel::Ch4,
        ] {
            tim.set_output_compare_mode(channel, OutputCompareMode::PwmMode1);
            tim.set_output_compare_preload(channel, true);
        }
        tim.enable_outputs();
        tim.start();

        Self { tim, _pins: pins }
    }
}

fn hw_channel(channel: PulseChannel) -> HwChannel {
    match channel {
        PulseChannel::Ch1 => HwChannel::Ch1,
        PulseChannel::Ch2 => HwChannel::Ch2,
        PulseChannel::Ch3 => HwChannel::Ch3,
        PulseChannel::Ch4 => HwChannel::Ch4,
    }
}

impl PulseGenerator for PulseOutputs {
    fn set_prescale(&mut self, divisor: u16) {
        // Latched by hardware at the next update event; the tuner forces it
        // live by cycling the channels
        self.tim.regs_gp16().psc().write(|w| w.set_psc(divisor));
    }

    fn set_compare(&mut self, channel: PulseChannel, value: u16) {
        self.tim.set_compare_value(hw_channel(channel), value as u32);
    }

    fn start_channel(&mut self, channel: PulseChannel) {
        self.tim.enable_channel(hw_channel(channel), true);
    }

    fn stop_channel(&mut self, channel: PulseChannel) {
        self.tim.enable_channel(hw_channel(channel), false);
    }
}
