//! Compiled-in song catalog.
//!
//! Three songs carried over from the shipped music box. Little Star and
//! Little Bee are note lists played under a fixed 350 ms window with a
//! 60 ms gap; Ode to Joy carries an authored duration for every note and
//! is phrased 90% on / 10% off. The two policies produce audibly
//! different phrasing and stay separate.

use super::note::{Note, NoteCycle, REST};
use super::note::{A4, A5, B4, B5, C5, CS5, D4, D5, D6, E4, E5, E6, F5, FS4, FS5, G5, GS5};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SongId {
    LittleStar,
    LittleBee,
    OdeToJoy,
}

pub const SONG_COUNT: usize = 3;

impl SongId {
    /// Cyclic successor, 0 -> 1 -> 2 -> 0.
    pub fn next(self) -> SongId {
        match self {
            SongId::LittleStar => SongId::LittleBee,
            SongId::LittleBee => SongId::OdeToJoy,
            SongId::OdeToJoy => SongId::LittleStar,
        }
    }

    pub fn display_name(self) -> &'static str {
        get(self).name
    }
}

/// Per-song duration policy.
#[derive(Clone, Copy, Debug)]
pub enum Phrasing {
    /// Fixed absolute sound window and gap, ignoring any authored duration.
    Window { on_ms: u32, gap_ms: u32 },
    /// Authored per-note durations, sounded for 90% with a 10% breath.
    PerNote { durations_ms: &'static [u16] },
}

pub struct Song {
    pub name: &'static str,
    pub tones: &'static [u16],
    pub phrasing: Phrasing,
}

impl Song {
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Note at `index`. Callers wrap the index first; the sequencer never
    /// passes one past the end.
    pub fn note(&self, index: usize) -> Note {
        let duration_ms = match self.phrasing {
            Phrasing::Window { on_ms, gap_ms } => on_ms + gap_ms,
            Phrasing::PerNote { durations_ms } => durations_ms[index] as u32,
        };
        Note {
            tone: self.tones[index],
            duration_ms,
        }
    }

    /// Sound/silence split for the note at `index` under this song's
    /// phrasing. The truncating 9/10 and 1/10 splits match the shipped
    /// firmware's float-then-truncate arithmetic.
    pub fn cycle(&self, index: usize) -> NoteCycle {
        let tone = self.tones[index];
        match self.phrasing {
            Phrasing::Window { on_ms, gap_ms } => NoteCycle { tone, on_ms, gap_ms },
            Phrasing::PerNote { durations_ms } => {
                let d = durations_ms[index] as u32;
                NoteCycle {
                    tone,
                    on_ms: d * 9 / 10,
                    gap_ms: d / 10,
                }
            }
        }
    }
}

pub fn get(id: SongId) -> &'static Song {
    match id {
        SongId::LittleStar => &LITTLE_STAR,
        SongId::LittleBee => &LITTLE_BEE,
        SongId::OdeToJoy => &ODE_TO_JOY,
    }
}

const DEFAULT_ON_MS: u32 = 350;
const DEFAULT_GAP_MS: u32 = 60;

pub static LITTLE_STAR: Song = Song {
    name: "Little Star",
    tones: &LITTLE_STAR_TONES,
    phrasing: Phrasing::Window {
        on_ms: DEFAULT_ON_MS,
        gap_ms: DEFAULT_GAP_MS,
    },
};

pub static LITTLE_BEE: Song = Song {
    name: "Little Bee",
    tones: &LITTLE_BEE_TONES,
    phrasing: Phrasing::Window {
        on_ms: DEFAULT_ON_MS,
        gap_ms: DEFAULT_GAP_MS,
    },
};

pub static ODE_TO_JOY: Song = Song {
    name: "Ode to Joy",
    tones: &ODE_TO_JOY_TONES,
    phrasing: Phrasing::PerNote {
        durations_ms: &ODE_TO_JOY_DURATIONS_MS,
    },
};

// every authored note needs an authored duration
const _: () = assert!(ODE_TO_JOY_TONES.len() == ODE_TO_JOY_DURATIONS_MS.len());

pub const LITTLE_STAR_TONES: [u16; 47] = [
    C5, C5, G5, G5, A5, A5, G5, REST,
    F5, F5, E5, E5, D5, D5, C5, REST,
    G5, G5, F5, F5, E5, E5, D5, REST,
    G5, G5, F5, F5, E5, E5, D5, REST,
    C5, C5, G5, G5, A5, A5, G5, REST,
    F5, F5, E5, E5, D5, D5, C5,
];

pub const LITTLE_BEE_TONES: [u16; 45] = [
    G5, E5, E5, REST, F5, D5, D5, REST,
    C5, D5, E5, F5, G5, G5, G5, REST,
    G5, G5, G5, G5, E5, E5, E5, REST,
    F5, F5, F5, F5, D5, D5, D5, REST,
    G5, E5, E5, REST, F5, D5, D5, REST,
    C5, E5, G5, G5, C5,
];

pub const ODE_TO_JOY_TONES: [u16; 354] = [
    CS5, CS5, D5, E5, E5, D5, CS5, B4, A4, A4,
    B4, CS5, CS5, B4, B4, CS5, CS5, D5, E5, E5,
    D5, CS5, B4, A4, A4, B4, CS5, B4, A4, A4,
    B4, B4, CS5, A4, B4, CS5, D5, CS5, A4, B4,
    CS5, D5, CS5, B4, A4, B4, E4, CS5, CS5, D5,
    E5, E5, D5, CS5, B4, A4, A4, B4, CS5, B4,
    A4, A4, A4, A4, B4, CS5, D5, E5, FS5, FS5,
    G5, A5, B5, A5, G5, FS5, D5, D5, E5, FS5,
    FS5, E5, E5, FS5, FS5, G5, A5, B5, A5, G5,
    FS5, D5, D5, E5, FS5, E5, D5, D5, CS5, CS5,
    D5, E5, E5, D5, CS5, B4, A4, A4, B4, CS5,
    CS5, B4, B4, CS5, CS5, D5, E5, E5, D5, CS5,
    B4, A4, A4, B4, CS5, B4, A4, A4, B4, B4,
    CS5, A4, B4, CS5, D5, CS5, A4, B4, CS5, D5,
    CS5, B4, A4, B4, E4, CS5, CS5, D5, E5, E5,
    D5, CS5, B4, A4, A4, B4, CS5, B4, A4, A4,
    A4, A4, B4, CS5, D5, E5, FS5, FS5, G5, A5,
    B5, A5, G5, FS5, D5, D5, E5, FS5, FS5, E5,
    E5, FS5, FS5, G5, A5, B5, A5, G5, FS5, D5,
    D5, E5, FS5, E5, D5, D5, FS4, A4, D5, FS5,
    FS5, FS5, G5, A5, B5, A5, G5, FS5, D5, D5,
    E5, FS5, E5, D5, D5, D4, D6, D6, D6, D6,
    E6, D6, CS5, E6, D6, B5, D6, CS5, A5, CS5,
    D6, E6, D6, E6, B5, GS5, CS5, CS5, D5, E5,
    E5, D5, CS5, B4, A4, A4, B4, CS5, CS5, B4,
    B4, CS5, CS5, D5, E5, E5, D5, CS5, B4, A4,
    A4, B4, CS5, B4, A4, A4, B4, B4, CS5, A4,
    B4, CS5, D5, CS5, A4, B4, CS5, D5, CS5, B4,
    A4, B4, E4, CS5, CS5, D5, E5, E5, D5, CS5,
    B4, A4, A4, B4, CS5, B4, A4, A4, A4, A4,
    B4, CS5, D5, E5, FS5, FS5, G5, A5, B5, A5,
    G5, FS5, D5, D5, E5, FS5, FS5, E5, E5, FS5,
    FS5, G5, A5, B5, A5, G5, FS5, D5, D5, E5,
    FS5, E5, D5, D5, FS4, A4, D5, FS5, FS5, FS5,
    G5, A5, B5, A5, G5, FS5, D5, D5, E5, FS5,
    E5, D5, D5, D4,
];

pub const ODE_TO_JOY_DURATIONS_MS: [u16; 354] = [
    625, 625, 625, 625, 625, 625, 625, 562, 625, 625, 625, 625,
    937, 312, 1125, 625, 625, 625, 625, 625, 625, 625, 562, 625,
    625, 625, 625, 937, 312, 1125, 625, 625, 625, 625, 625, 312,
    312, 625, 562, 625, 312, 312, 625, 625, 625, 625, 562, 1250,
    625, 625, 625, 625, 625, 625, 562, 625, 625, 625, 625, 937,
    312, 562, 104, 104, 104, 104, 104, 140, 625, 625, 625, 625,
    625, 625, 625, 562, 625, 625, 625, 625, 937, 312, 1125, 625,
    625, 625, 625, 625, 625, 625, 562, 625, 625, 625, 625, 937,
    312, 562, 156, 156, 156, 140, 625, 625, 625, 625, 625, 312,
    312, 625, 562, 625, 312, 312, 625, 625, 625, 625, 562, 1875,
    625, 625, 625, 625, 625, 562, 625, 625, 625, 625, 937, 281,
    26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26,
    26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26,
    26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26,
    26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 625,
    625, 625, 625, 625, 625, 625, 562, 625, 625, 625, 625, 937,
    312, 1125, 625, 625, 625, 625, 625, 625, 625, 562, 625, 625,
    625, 625, 937, 312, 1125, 625, 625, 625, 625, 625, 312, 312,
    625, 562, 625, 312, 312, 625, 625, 625, 625, 562, 1250, 625,
    625, 625, 625, 625, 625, 562, 625, 625, 625, 625, 937, 312,
    562, 104, 104, 104, 104, 104, 140, 625, 625, 625, 625, 625,
    625, 625, 562, 625, 625, 625, 625, 937, 312, 1125, 625, 625,
    625, 625, 625, 625, 625, 562, 625, 625, 625, 625, 937, 312,
    562, 156, 156, 156, 140, 625, 625, 625, 625, 625, 625, 625,
    562, 625, 625, 625, 625, 937, 312, 1125, 2250, 625, 625, 625,
    625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625,
    625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625,
    625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625,
    625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625, 625,
    625, 625, 625, 625, 625, 625,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_nonempty_songs() {
        for id in [SongId::LittleStar, SongId::LittleBee, SongId::OdeToJoy] {
            assert!(!get(id).is_empty());
        }
    }

    #[test]
    fn next_song_cycles() {
        assert_eq!(SongId::LittleStar.next(), SongId::LittleBee);
        assert_eq!(SongId::LittleBee.next(), SongId::OdeToJoy);
        assert_eq!(SongId::OdeToJoy.next(), SongId::LittleStar);
    }

    #[test]
    fn per_note_durations_cover_every_tone() {
        assert_eq!(ODE_TO_JOY_TONES.len(), ODE_TO_JOY_DURATIONS_MS.len());
    }

    #[test]
    fn wrapped_index_always_yields_a_note() {
        for id in [SongId::LittleStar, SongId::LittleBee, SongId::OdeToJoy] {
            let song = get(id);
            for i in 0..(song.len() * 2 + 3) {
                let note = song.note(i % song.len());
                assert!(note.duration_ms > 0);
            }
        }
    }

    #[test]
    fn window_phrasing_uses_fixed_split() {
        let cycle = LITTLE_STAR.cycle(0);
        assert_eq!(cycle.tone, C5);
        assert_eq!(cycle.on_ms, 350);
        assert_eq!(cycle.gap_ms, 60);
    }

    #[test]
    fn per_note_phrasing_splits_90_10() {
        // first authored duration of Ode to Joy is 625 ms
        let cycle = ODE_TO_JOY.cycle(0);
        assert_eq!(cycle.tone, CS5);
        assert_eq!(cycle.on_ms, 562);
        assert_eq!(cycle.gap_ms, 62);
    }

    #[test]
    fn rests_are_plain_notes_with_zero_tone() {
        let idx = LITTLE_STAR_TONES.iter().position(|&t| t == REST).unwrap();
        let note = LITTLE_STAR.note(idx);
        assert_eq!(note.tone, REST);
        assert_eq!(note.duration_ms, 410);
    }
}
