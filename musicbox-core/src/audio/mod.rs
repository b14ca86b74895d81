pub mod note;
pub mod sequencer;
pub mod songs;
pub mod tone;
