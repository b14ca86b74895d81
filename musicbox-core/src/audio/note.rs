//! Pitches and the atomic playback unit.

/// A tone of 0 Hz produces silence for its duration.
pub const REST: u16 = 0;

pub const D4: u16 = 294;
pub const E4: u16 = 330;
pub const FS4: u16 = 370;
pub const G4: u16 = 392;
pub const GS4: u16 = 415;
pub const A4: u16 = 440;
pub const B4: u16 = 494;
pub const C5: u16 = 523;
pub const CS5: u16 = 554;
pub const D5: u16 = 587;
pub const E5: u16 = 659;
pub const F5: u16 = 698;
pub const FS5: u16 = 740;
pub const G5: u16 = 784;
pub const GS5: u16 = 831;
pub const A5: u16 = 880;
pub const B5: u16 = 988;
pub const C6: u16 = 1047;
pub const D6: u16 = 1175;
pub const E6: u16 = 1319;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// Frequency in Hz, `REST` for silence.
    pub tone: u16,
    pub duration_ms: u32,
}

/// One full sequencer pass worth of sound: drive `tone` for `on_ms`,
/// then hold silence for `gap_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteCycle {
    pub tone: u16,
    pub on_ms: u32,
    pub gap_ms: u32,
}
