//! Playback state machine: current song, note cursor, play/pause.
//!
//! The sequencer owns all playback state and is only ever touched from the
//! single player loop, so every transition is a plain `&mut self` call. It
//! plans one note cycle per pass; the caller performs the actual sustain
//! and gap delays.

use super::note::NoteCycle;
use super::songs::{self, SongId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
}

impl PlaybackStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
        }
    }
}

/// What the player loop should do this pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPlan {
    /// Sound the cycle, then rest for its gap.
    Note(NoteCycle),
    /// Paused: force silence and idle for `ms` before the next pass.
    Idle { ms: u32 },
}

pub struct Sequencer {
    song: SongId,
    note_index: usize,
    status: PlaybackStatus,
}

impl Sequencer {
    /// Idle delay between passes while paused. Keeps silence actively
    /// maintained and bounds the button-poll latency.
    pub const PAUSED_IDLE_MS: u32 = 50;

    pub fn new() -> Self {
        Sequencer {
            song: SongId::LittleStar,
            note_index: 0,
            status: PlaybackStatus::Paused,
        }
    }

    pub fn song(&self) -> SongId {
        self.song
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn toggle_play_pause(&mut self) {
        self.status = match self.status {
            PlaybackStatus::Playing => PlaybackStatus::Paused,
            PlaybackStatus::Paused => PlaybackStatus::Playing,
        };
    }

    /// Switch to the next song and rewind. Play/pause status is untouched.
    /// The switch and the index reset happen together; a note of the new
    /// song is never fetched at the old cursor.
    pub fn next_song(&mut self) {
        self.song = self.song.next();
        self.note_index = 0;
    }

    /// Plan one pass. While playing this wraps the cursor, fetches the
    /// current note cycle under the song's phrasing, and advances.
    pub fn plan_tick(&mut self) -> TickPlan {
        if self.status == PlaybackStatus::Paused {
            return TickPlan::Idle {
                ms: Self::PAUSED_IDLE_MS,
            };
        }

        let song = songs::get(self.song);
        if song.is_empty() {
            // no catalog song is empty, but an empty one idles rather
            // than indexing
            return TickPlan::Idle {
                ms: Self::PAUSED_IDLE_MS,
            };
        }
        if self.note_index >= song.len() {
            self.note_index = 0;
        }
        let cycle = song.cycle(self.note_index);
        self.note_index += 1;

        TickPlan::Note(cycle)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::note::{C5, G5};

    #[test]
    fn starts_paused_on_first_song() {
        let seq = Sequencer::new();
        assert_eq!(seq.song(), SongId::LittleStar);
        assert_eq!(seq.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut seq = Sequencer::new();
        seq.toggle_play_pause();
        assert_eq!(seq.status(), PlaybackStatus::Playing);
        seq.toggle_play_pause();
        assert_eq!(seq.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn next_song_cycles_through_all_three() {
        let mut seq = Sequencer::new();
        seq.next_song();
        assert_eq!(seq.song(), SongId::LittleBee);
        seq.next_song();
        assert_eq!(seq.song(), SongId::OdeToJoy);
        seq.next_song();
        assert_eq!(seq.song(), SongId::LittleStar);
    }

    #[test]
    fn next_song_rewinds_mid_playback() {
        let mut seq = Sequencer::new();
        seq.toggle_play_pause();
        for _ in 0..5 {
            seq.plan_tick();
        }
        seq.next_song();
        // first note of Little Bee is G5
        match seq.plan_tick() {
            TickPlan::Note(cycle) => assert_eq!(cycle.tone, G5),
            other => panic!("expected a note, got {:?}", other),
        }
    }

    #[test]
    fn paused_tick_idles_and_never_advances() {
        let mut seq = Sequencer::new();
        for _ in 0..3 {
            assert_eq!(
                seq.plan_tick(),
                TickPlan::Idle {
                    ms: Sequencer::PAUSED_IDLE_MS
                }
            );
        }
        seq.toggle_play_pause();
        match seq.plan_tick() {
            TickPlan::Note(cycle) => assert_eq!(cycle.tone, C5),
            other => panic!("expected the first note, got {:?}", other),
        }
    }

    #[test]
    fn cursor_wraps_for_looping_playback() {
        let mut seq = Sequencer::new();
        seq.toggle_play_pause();
        let len = crate::audio::songs::get(SongId::LittleStar).len();
        for _ in 0..len {
            seq.plan_tick();
        }
        // one full lap done; the next pass starts the song over
        match seq.plan_tick() {
            TickPlan::Note(cycle) => assert_eq!(cycle.tone, C5),
            other => panic!("expected wrap to the first note, got {:?}", other),
        }
    }

    #[test]
    fn pausing_freezes_the_cursor() {
        let mut seq = Sequencer::new();
        seq.toggle_play_pause();
        seq.plan_tick();
        seq.plan_tick();
        seq.toggle_play_pause();
        seq.plan_tick();
        seq.toggle_play_pause();
        // resumes at the third note, G5
        match seq.plan_tick() {
            TickPlan::Note(cycle) => assert_eq!(cycle.tone, G5),
            other => panic!("expected playback to resume in place, got {:?}", other),
        }
    }
}
