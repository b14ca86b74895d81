//! Fixed status layout mirrored to the text panel every pass.

use core::fmt::Write;

use heapless::String;

use crate::audio::sequencer::PlaybackStatus;
use crate::audio::songs::SongId;

/// Text panel the status view draws on. Glyph rendering is the panel's
/// concern; the view only places strings.
pub trait TextPanel {
    fn draw(&mut self, row: u8, col: u8, text: &str);
}

pub const TITLE_ROW: u8 = 0;
pub const SONG_ROW: u8 = 2;
pub const STATUS_ROW: u8 = 4;

const LINE_CAP: usize = 32;

/// Redraw the whole fixed layout from the current playback state.
pub fn render<P: TextPanel>(panel: &mut P, song: SongId, status: PlaybackStatus) {
    panel.draw(TITLE_ROW, 0, "Music Box");

    let mut line: String<LINE_CAP> = String::new();
    let _ = write!(line, "Song: {}", song.display_name());
    panel.draw(SONG_ROW, 0, &line);

    line.clear();
    let _ = write!(line, "Status: {}", status.label());
    panel.draw(STATUS_ROW, 0, &line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPanel {
        draws: Vec<(u8, u8, std::string::String)>,
    }

    impl TextPanel for MockPanel {
        fn draw(&mut self, row: u8, col: u8, text: &str) {
            self.draws.push((row, col, text.into()));
        }
    }

    #[test]
    fn renders_the_fixed_layout() {
        let mut panel = MockPanel::default();
        render(&mut panel, SongId::LittleStar, PlaybackStatus::Playing);
        assert_eq!(
            panel.draws,
            vec![
                (0, 0, "Music Box".to_string()),
                (2, 0, "Song: Little Star".to_string()),
                (4, 0, "Status: Playing".to_string()),
            ]
        );
    }

    #[test]
    fn reflects_song_and_pause_changes() {
        let mut panel = MockPanel::default();
        render(&mut panel, SongId::OdeToJoy, PlaybackStatus::Paused);
        assert!(panel
            .draws
            .iter()
            .any(|(_, _, t)| t == "Song: Ode to Joy"));
        assert!(panel
            .draws
            .iter()
            .any(|(_, _, t)| t == "Status: Paused"));
    }
}
