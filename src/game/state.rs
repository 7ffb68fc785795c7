use super::entity::{formation, Alien, Bullet, Position, Ship};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Everything the simulation, the input handler and the renderer share.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub alien_bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub score: u32,
    pub tick: u64,
    pub game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            ship: Ship::centered(),
            bullets: Vec::new(),
            alien_bullets: Vec::new(),
            aliens: formation(),
            score: 0,
            tick: 0,
            game_over: false,
        }
    }

    /// `None` while the game is running. Once over, the game is won exactly
    /// when no aliens remain.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            None
        } else if self.aliens.is_empty() {
            Some(Outcome::Won)
        } else {
            Some(Outcome::Lost)
        }
    }

    pub fn alien_at(&self, pos: Position) -> bool {
        self.aliens.contains(&pos)
    }

    pub fn bullet_at(&self, pos: Position) -> bool {
        self.bullets.iter().any(|b| b.pos == pos)
    }

    pub fn alien_bullet_at(&self, pos: Position) -> bool {
        self.alien_bullets.iter().any(|b| b.pos == pos)
    }

    pub fn ship_at(&self, pos: Position) -> bool {
        self.ship.position() == pos
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
