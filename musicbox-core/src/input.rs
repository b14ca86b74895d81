//! Two-phase button debouncing.
//!
//! The player loop polls each button once per pass. A level change that
//! matches the button's active edge is only a candidate; the caller waits
//! `SETTLE_MS` and re-samples, and the press counts only if `confirm`
//! still sees the pressed polarity. A failed confirm is dropped silently.

/// Settle delay between the candidate edge and the confirming re-sample.
pub const SETTLE_MS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Idle-low button, pressed reads high.
    Rising,
    /// Idle-high button (pull-up), pressed reads low.
    Falling,
}

pub struct DebouncedButton {
    edge: Edge,
    last_level: bool,
}

impl DebouncedButton {
    pub fn new(edge: Edge, initial_level: bool) -> Self {
        DebouncedButton {
            edge,
            last_level: initial_level,
        }
    }

    /// Feed one poll sample. Returns true when the transition from the
    /// previous sample matches the active edge. The remembered level is
    /// updated unconditionally, whether or not an edge fired.
    pub fn edge_candidate(&mut self, level: bool) -> bool {
        let fired = match self.edge {
            Edge::Rising => !self.last_level && level,
            Edge::Falling => self.last_level && !level,
        };
        self.last_level = level;
        fired
    }

    /// Post-settle re-sample check: still at the pressed polarity?
    pub fn confirm(&self, level: bool) -> bool {
        match self.edge {
            Edge::Rising => level,
            Edge::Falling => !level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a poll sequence the way the player loop does: a candidate edge
    /// consumes the following level as its post-settle re-sample, and that
    /// re-sample never feeds back into edge detection.
    fn fired_presses(edge: Edge, initial: bool, levels: &[bool]) -> usize {
        let mut btn = DebouncedButton::new(edge, initial);
        let mut presses = 0;
        let mut i = 0;
        while i < levels.len() {
            if btn.edge_candidate(levels[i]) {
                let resample = if i + 1 < levels.len() {
                    levels[i + 1]
                } else {
                    levels[i]
                };
                if btn.confirm(resample) {
                    presses += 1;
                }
                i += 1;
            }
            i += 1;
        }
        presses
    }

    #[test]
    fn clean_rising_press_fires_once() {
        assert_eq!(fired_presses(Edge::Rising, false, &[false, false, true, true, true]), 1);
    }

    #[test]
    fn bouncing_rising_edge_is_discarded() {
        // candidate at the first 0->1, but the settle re-sample reads the
        // bounce back to low; no command comes out of the whole burst
        assert_eq!(fired_presses(Edge::Rising, false, &[false, true, false, true, true]), 0);
    }

    #[test]
    fn clean_falling_press_fires_once() {
        assert_eq!(fired_presses(Edge::Falling, true, &[true, true, false, false, false]), 1);
    }

    #[test]
    fn holding_the_button_does_not_refire() {
        assert_eq!(
            fired_presses(Edge::Rising, false, &[false, true, true, true, true, true, true]),
            1
        );
    }

    #[test]
    fn release_and_repress_fires_again() {
        assert_eq!(
            fired_presses(
                Edge::Rising,
                false,
                &[false, true, true, false, false, true, true]
            ),
            2
        );
    }

    #[test]
    fn last_level_updates_even_without_an_edge() {
        let mut btn = DebouncedButton::new(Edge::Falling, true);
        // the first low sample is the candidate; the second must not be
        assert!(btn.edge_candidate(false));
        assert!(!btn.edge_candidate(false));
        // back high, then low again: a fresh candidate
        assert!(!btn.edge_candidate(true));
        assert!(btn.edge_candidate(false));
    }
}
