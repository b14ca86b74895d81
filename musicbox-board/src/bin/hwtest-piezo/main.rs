#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use musicbox_board::{drivers::buzzer::PiezoPwm, get_system_config};
use musicbox_core::audio::note::{A5, B5, C5, C6, D5, E5, F5, G5};
use musicbox_core::audio::tone::ToneSynth;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(get_system_config());

    info!("piezo hwtest: C major scale at half volume");

    let mut synth = ToneSynth::new(PiezoPwm::new(p.TIM3, p.PA6));

    loop {
        for tone in [C5, D5, E5, F5, G5, A5, B5, C6] {
            synth.play_tone(tone, 2048);
            Timer::after_millis(350).await;
            synth.stop();
            Timer::after_millis(60).await;
        }
        Timer::after_millis(1000).await;
    }
}
