//! End-game banners.
//!
//! Each animation is a small cyclic frame counter; the driver advances it on
//! its own timer and it keeps looping until the process exits.

use ratatui::prelude::*;

use crate::game::geometry::{HEIGHT, WIDTH};
use crate::game::Outcome;

const WIN_FRAMES: [&str; 5] = [
    "        ✨        ",
    "    🎆     🎆    ",
    "  🎇   ✨   🎇  ",
    "    🎆     🎆    ",
    "        ✨        ",
];

const LOSE_FRAMES: [&str; 5] = [
    "       · ^ ·       ",
    "     * \\ | / *     ",
    "   💥  ─ ✸ ─  💥   ",
    "     * / | \\ *     ",
    "       ·   ·       ",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    outcome: Outcome,
    frame: usize,
}

impl Animation {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome, frame: 0 }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.frames().len();
    }

    fn frames(&self) -> &'static [&'static str] {
        match self.outcome {
            Outcome::Won => &WIN_FRAMES,
            Outcome::Lost => &LOSE_FRAMES,
        }
    }

    fn banners(&self) -> (&'static str, &'static str) {
        match self.outcome {
            Outcome::Won => ("🏆 YOU WIN! 🏆", "Thanks for saving the galaxy!"),
            Outcome::Lost => ("💀 GAME OVER 💀", "The invaders got you!"),
        }
    }

    fn style(&self) -> Style {
        match self.outcome {
            Outcome::Won => Style::default().fg(Color::Yellow),
            Outcome::Lost => Style::default().fg(Color::Red),
        }
    }

    /// `HEIGHT` lines occupying the space the board would.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mid = (HEIGHT / 2) as usize;
        let (headline, tagline) = self.banners();
        let style = self.style();

        (0..HEIGHT as usize)
            .map(|row| {
                if row + 1 == mid {
                    Line::styled(center(self.frames()[self.frame]), style)
                } else if row == mid {
                    Line::styled(center(headline), style.add_modifier(Modifier::BOLD))
                } else if row == mid + 1 {
                    Line::raw(center(tagline))
                } else {
                    Line::raw(" ".repeat(WIDTH as usize))
                }
            })
            .collect()
    }
}

/// Left-pad `text` so it sits in the middle of the board, measured in
/// terminal columns.
fn center(text: &str) -> String {
    let width = Span::raw(text).width() as i32;
    let pad = ((WIDTH - width) / 2).max(0) as usize;
    format!("{}{}", " ".repeat(pad), text)
}
