use ratatui::prelude::*;

use crate::game::geometry::{bottom_border, top_border, HEIGHT, LEFT_BORDER, RIGHT_BORDER, WIDTH};
use crate::game::{GameState, Position};

/// What a single board cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Alien,
    Bullet,
    AlienBullet,
    Ship,
    Empty,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Alien => '@',
            Cell::Bullet => '|',
            Cell::AlienBullet => '!',
            Cell::Ship => '^',
            Cell::Empty => ' ',
        }
    }

    pub fn style(self) -> Style {
        match self {
            Cell::Alien => Style::default().fg(Color::Green),
            Cell::Bullet => Style::default().fg(Color::Yellow),
            Cell::AlienBullet => Style::default().fg(Color::Red),
            Cell::Ship => Style::default().fg(Color::Cyan),
            Cell::Empty => Style::default(),
        }
    }
}

/// Resolve overlaps: alien, then player bullet, then alien bullet, then ship.
pub fn cell_at(state: &GameState, x: i32, y: i32) -> Cell {
    let pos = Position::new(x, y);
    if state.alien_at(pos) {
        Cell::Alien
    } else if state.bullet_at(pos) {
        Cell::Bullet
    } else if state.alien_bullet_at(pos) {
        Cell::AlienBullet
    } else if state.ship_at(pos) {
        Cell::Ship
    } else {
        Cell::Empty
    }
}

fn row(state: &GameState, y: i32) -> Line<'static> {
    let mut spans = Vec::with_capacity(WIDTH as usize + 2);
    spans.push(Span::raw(LEFT_BORDER));
    for x in 0..WIDTH {
        let cell = cell_at(state, x, y);
        spans.push(Span::styled(cell.glyph().to_string(), cell.style()));
    }
    spans.push(Span::raw(RIGHT_BORDER));
    Line::from(spans)
}

/// The bordered playfield, `HEIGHT + 2` lines of `WIDTH + 2` columns.
pub fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(HEIGHT as usize + 2);
    lines.push(Line::raw(top_border()));
    lines.extend((0..HEIGHT).map(|y| row(state, y)));
    lines.push(Line::raw(bottom_border()));
    lines
}
