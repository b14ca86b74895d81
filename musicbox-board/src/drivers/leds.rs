use embassy_stm32::gpio::{Level, Output, Pin, Speed};

use musicbox_core::audio::{sequencer::PlaybackStatus, songs::SongId};

/// The four status LEDs: two song-select bits and a playing/paused pair.
pub struct StatusLeds<'a> {
    song0: Output<'a>,
    song1: Output<'a>,
    playing: Output<'a>,
    paused: Output<'a>,
}

impl<'a> StatusLeds<'a> {
    // bit 0 = song LED 0, bit 1 = song LED 1
    const SONG_TO_PATTERN: [u8; 3] = [0b01, 0b10, 0b11];

    pub fn new(song0: impl Pin, song1: impl Pin, playing: impl Pin, paused: impl Pin) -> Self {
        Self {
            song0: Output::new(song0, Level::Low, Speed::Low),
            song1: Output::new(song1, Level::Low, Speed::Low),
            playing: Output::new(playing, Level::Low, Speed::Low),
            paused: Output::new(paused, Level::Low, Speed::Low),
        }
    }

    pub fn set(&mut self, song: SongId, status: PlaybackStatus) {
        let bits = Self::SONG_TO_PATTERN[song as usize];
        self.song0.set_level((bits & 0x01 != 0).into());
        self.song1.set_level((bits & 0x02 != 0).into());

        let playing = status == PlaybackStatus::Playing;
        self.playing.set_level(playing.into());
        self.paused.set_level((!playing).into());
    }
}
