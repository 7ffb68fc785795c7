use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::entity::Bullet;
use super::geometry::HEIGHT;
use super::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Fire,
    Quit,
}

impl Command {
    /// Map a raw key event to a game command. Only presses count.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        // Raw mode swallows SIGINT, so Ctrl+C has to be handled here.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }
        match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Left => Some(Command::Left),
            KeyCode::Right => Some(Command::Right),
            KeyCode::Char(' ') => Some(Command::Fire),
            _ => None,
        }
    }
}

/// Apply a movement or fire command. Quit is the caller's business; every
/// command is ignored once the game is over.
pub fn apply(state: &mut GameState, command: Command) {
    if state.game_over {
        return;
    }
    match command {
        Command::Left => state.ship.move_left(),
        Command::Right => state.ship.move_right(),
        Command::Fire => state.bullets.push(Bullet::at(state.ship.x, HEIGHT - 2)),
        Command::Quit => {}
    }
}
