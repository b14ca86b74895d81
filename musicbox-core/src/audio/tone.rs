//! Square-wave tone synthesis: target frequency + live volume sample in,
//! PWM period/duty ticks out.

use crate::ADC_MAX;

/// PWM timer tick rate the period math is expressed in.
pub const PWM_TICK_HZ: u32 = 1_000_000;

/// Reload floor; keeps very high frequencies from producing a degenerate
/// zero or one tick period.
pub const MIN_PERIOD_TICKS: u32 = 2;

/// Volume divisor. Deliberately larger than `ADC_MAX` so duty tops out
/// near half the period. The headroom is part of the shipped sound.
pub const VOLUME_DIVISOR: u32 = 8192;

/// Single-channel PWM output the synth drives. Ticks are `PWM_TICK_HZ`.
pub trait TonePwm {
    fn set_period(&mut self, ticks: u32);
    fn set_duty(&mut self, ticks: u32);
    /// Restart the counter at 0 so a new period takes effect at the start
    /// of a cycle instead of mid-way through a stale one.
    fn reset_counter(&mut self);
}

pub struct ToneSynth<D: TonePwm> {
    pwm: D,
}

impl<D: TonePwm> ToneSynth<D> {
    pub fn new(pwm: D) -> Self {
        ToneSynth { pwm }
    }

    /// Drive `tone` Hz at the loudness given by `volume_raw` (0..=ADC_MAX).
    ///
    /// A rest (`tone == 0`) only forces the duty to zero; the period keeps
    /// its previous value and the timer keeps running.
    pub fn play_tone(&mut self, tone: u16, volume_raw: u16) {
        if tone == 0 {
            self.pwm.set_duty(0);
            return;
        }

        let period = period_ticks(tone);
        let duty = duty_ticks(period, volume_raw);

        self.pwm.set_period(period);
        self.pwm.set_duty(duty);
        self.pwm.reset_counter();
    }

    /// Force silence. Idempotent; safe when already silent.
    pub fn stop(&mut self) {
        self.pwm.set_duty(0);
    }
}

pub fn period_ticks(tone: u16) -> u32 {
    let period = PWM_TICK_HZ / tone as u32;
    period.max(MIN_PERIOD_TICKS)
}

pub fn duty_ticks(period: u32, volume_raw: u16) -> u32 {
    period * volume_raw as u32 / VOLUME_DIVISOR
}

/// Volume as an integer percentage for the diagnostic line.
pub fn volume_percent(volume_raw: u16) -> u8 {
    (volume_raw as u32 * 100 / ADC_MAX as u32) as u8
}
