use core::fmt::Write;

use embassy_stm32::{mode::Blocking, usart::UartTx};
use heapless::String;

use musicbox_core::display::TextPanel;

/// Status panel over a serial terminal with ANSI cursor addressing.
///
/// Stands in for the board's character LCD; the draw contract is the
/// same row/column/text placement, glyph rendering is the terminal's
/// problem.
pub struct AnsiPanel<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> AnsiPanel<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        AnsiPanel { tx }
    }

    fn goto(&mut self, row: u8, col: u8) {
        let mut seq: String<12> = String::new();
        let _ = write!(seq, "\x1b[{};{}H", row + 1, col + 1);
        let _ = self.tx.blocking_write(seq.as_bytes());
    }
}

impl TextPanel for AnsiPanel<'_> {
    fn draw(&mut self, row: u8, col: u8, text: &str) {
        self.goto(row, col);
        let _ = self.tx.blocking_write(text.as_bytes());
    }
}
