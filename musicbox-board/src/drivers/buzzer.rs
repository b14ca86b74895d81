use embassy_stm32::{
    gpio::OutputType,
    pac,
    time::hz,
    timer::{
        low_level::CountingMode,
        simple_pwm::{PwmPin, SimplePwm},
        Channel,
    },
};
use num_traits::clamp;

use musicbox_core::audio::tone::{TonePwm, PWM_TICK_HZ};

use crate::pins::{BuzzerPin, BuzzerTimer};

pub const BUZZER_MIN_FREQ: u16 = 35;
pub const BUZZER_MAX_FREQ: u16 = 7000;

// period bounds in 1 us ticks for the piezo's usable frequency band
const MIN_PERIOD_TICKS: u32 = PWM_TICK_HZ / BUZZER_MAX_FREQ as u32;
const MAX_PERIOD_TICKS: u32 = PWM_TICK_HZ / BUZZER_MIN_FREQ as u32;

const TIM: pac::timer::TimGp16 = pac::TIM3;

/// APB1 timer clock (72 MHz) divided down to the 1 MHz synthesis tick.
const PSC_1US_TICK: u16 = 71;

/// Single-channel piezo PWM on TIM3.
///
/// `SimplePwm` does the pin and timer bring-up; period, duty and counter
/// are then driven through the registers directly so the synthesis core's
/// tick values land unmodified.
pub struct PiezoPwm<'d> {
    _pwm: SimplePwm<'d, BuzzerTimer>,
}

impl<'d> PiezoPwm<'d> {
    pub fn new(timer: BuzzerTimer, pin: BuzzerPin) -> Self {
        let ch1 = PwmPin::new_ch1(pin, OutputType::PushPull);
        let mut pwm = SimplePwm::new(
            timer,
            Some(ch1),
            None,
            None,
            None,
            hz(1_000),
            CountingMode::EdgeAlignedUp,
        );
        pwm.channel(Channel::Ch1).enable();

        // SimplePwm picked a prescaler for the bring-up frequency;
        // re-time the counter to the synthesis tick and start silent
        TIM.psc().write_value(PSC_1US_TICK);
        TIM.ccr(0).write(|w| w.set_ccr(0));
        TIM.cnt().write(|w| w.set_cnt(0));

        PiezoPwm { _pwm: pwm }
    }
}

impl TonePwm for PiezoPwm<'_> {
    fn set_period(&mut self, ticks: u32) {
        let ticks = clamp(ticks, MIN_PERIOD_TICKS, MAX_PERIOD_TICKS);
        TIM.arr().write(|w| w.set_arr((ticks - 1) as u16));
    }

    fn set_duty(&mut self, ticks: u32) {
        TIM.ccr(0).write(|w| w.set_ccr(ticks as u16));
    }

    fn reset_counter(&mut self) {
        TIM.cnt().write(|w| w.set_cnt(0));
    }
}
