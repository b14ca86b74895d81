//! The player loop: one task, fixed pass order — poll buttons, refresh
//! LEDs and the status panel, run one sequencer tick. The note sustain and
//! gap delays block the whole pass, so buttons are only sampled between
//! notes. That coarse polling granularity is the shipped behavior.

use embassy_executor::Spawner;
use embassy_stm32::{
    adc::{Adc, AdcChannel},
    gpio::{Input, Pull},
    usart::{self, UartTx},
};
use embassy_time::Timer;

use musicbox_core::audio::note::REST;
use musicbox_core::audio::sequencer::{Sequencer, TickPlan};
use musicbox_core::audio::tone::{self, ToneSynth};
use musicbox_core::display;
use musicbox_core::input::{DebouncedButton, Edge, SETTLE_MS};

use crate::drivers::{buzzer::PiezoPwm, leds::StatusLeds, panel::AnsiPanel, volume::VolumeKnob};
use crate::pins::*;

#[macro_export]
macro_rules! create_player_task {
    ($spawner:ident, $p:ident) => {
        musicbox_board::tasks::player_task::start_player_task(
            &$spawner,
            $p.TIM3, $p.PA6,
            $p.PA0, $p.PC13,
            $p.ADC1, $p.PC4,
            $p.PF6, $p.PF7, $p.PF8, $p.PF9,
            $p.USART1, $p.PA9,
        );
    };
}

#[embassy_executor::task]
async fn player_task_entry(
    mut synth: ToneSynth<PiezoPwm<'static>>,
    mut knob: VolumeKnob<'static>,
    mut leds: StatusLeds<'static>,
    mut panel: AnsiPanel<'static>,
    play_pause_btn: Input<'static>,
    next_song_btn: Input<'static>,
) {
    let mut sequencer = Sequencer::new();
    let mut play_pause = DebouncedButton::new(Edge::Rising, play_pause_btn.is_high());
    let mut next_song = DebouncedButton::new(Edge::Falling, next_song_btn.is_high());

    loop {
        // play/pause: rising edge, settle, then the confirming re-sample
        if play_pause.edge_candidate(play_pause_btn.is_high()) {
            Timer::after_millis(SETTLE_MS as u64).await;
            if play_pause.confirm(play_pause_btn.is_high()) {
                sequencer.toggle_play_pause();
                defmt::info!("status changed: {=str}", sequencer.status().label());
            }
        }

        // next song: falling edge behind the pull-up
        if next_song.edge_candidate(next_song_btn.is_high()) {
            Timer::after_millis(SETTLE_MS as u64).await;
            if next_song.confirm(next_song_btn.is_high()) {
                sequencer.next_song();
                defmt::info!("song switched: {=str}", sequencer.song().display_name());
            }
        }

        leds.set(sequencer.song(), sequencer.status());
        display::render(&mut panel, sequencer.song(), sequencer.status());

        match sequencer.plan_tick() {
            TickPlan::Note(cycle) => {
                if cycle.tone == REST {
                    // rest: no volume sample, no report, duty forced to zero
                    synth.play_tone(cycle.tone, 0);
                } else {
                    let volume_raw = knob.read_raw();
                    defmt::info!(
                        "playing: {=str} | volume: {=u8}%",
                        sequencer.song().display_name(),
                        tone::volume_percent(volume_raw)
                    );
                    synth.play_tone(cycle.tone, volume_raw);
                }
                Timer::after_millis(cycle.on_ms as u64).await;
                synth.stop();
                Timer::after_millis(cycle.gap_ms as u64).await;
            }
            TickPlan::Idle { ms } => {
                // silence is re-asserted every pass, not assumed
                synth.stop();
                Timer::after_millis(ms as u64).await;
            }
        }
    }
}

pub fn start_player_task(
    spawner: &Spawner,
    buzzer_timer: BuzzerTimer,
    buzzer_pin: BuzzerPin,
    play_pause_pin: PlayPauseBtnPin,
    next_song_pin: NextSongBtnPin,
    volume_adc: VolumeAdc,
    volume_pot: VolumePotPin,
    song_led0: SongLed0Pin,
    song_led1: SongLed1Pin,
    playing_led: PlayingLedPin,
    paused_led: PausedLedPin,
    panel_uart: PanelUart,
    panel_tx: PanelTxPin,
) {
    let synth = ToneSynth::new(PiezoPwm::new(buzzer_timer, buzzer_pin));
    let knob = VolumeKnob::new(Adc::new(volume_adc), volume_pot.degrade_adc());
    let leds = StatusLeds::new(song_led0, song_led1, playing_led, paused_led);
    let tx = UartTx::new_blocking(panel_uart, panel_tx, usart::Config::default()).unwrap();
    let panel = AnsiPanel::new(tx);

    let play_pause_btn = Input::new(play_pause_pin, Pull::None);
    let next_song_btn = Input::new(next_song_pin, Pull::Up);

    spawner
        .spawn(player_task_entry(
            synth,
            knob,
            leds,
            panel,
            play_pause_btn,
            next_song_btn,
        ))
        .unwrap();
}
