#![no_std]

use embassy_stm32::{
    rcc::{ADCPrescaler, AHBPrescaler, APBPrescaler, Hse, HseMode, Pll, PllMul, PllPreDiv, PllSource, Sysclk},
    time::Hertz,
    Config,
};

pub mod drivers;
pub mod pins;
pub mod tasks;

pub fn get_system_config() -> Config {
    let mut config = Config::default();

    // 8 MHz external crystal, PLL x9 for a 72 MHz sysclk
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
    config.rcc.apb1_pre = APBPrescaler::DIV2; // 36 MHz bus, 72 MHz timer clock
    config.rcc.apb2_pre = APBPrescaler::DIV1;

    // ADC clock must stay under 14 MHz
    config.rcc.adc_pre = ADCPrescaler::DIV6;

    config
}
