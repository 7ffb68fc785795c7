use super::geometry::{ship_row, FORMATION_LEFT, FORMATION_ROWS, FORMATION_SPACING, WIDTH};

/// A cell on the board. Bullets may step one cell outside the board while a
/// tick is in progress, so coordinates are signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

pub type Alien = Position;

/// A projectile. Player bullets travel up, alien bullets travel down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub pos: Position,
}

impl Bullet {
    pub const fn at(x: i32, y: i32) -> Self {
        Self { pos: Position::new(x, y) }
    }

    pub fn moved(self, dy: i32) -> Self {
        Self::at(self.pos.x, self.pos.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ship {
    pub x: i32,
}

impl Ship {
    pub const fn centered() -> Self {
        Self { x: WIDTH / 2 }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, ship_row())
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - 1).max(0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + 1).min(WIDTH - 1);
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::centered()
    }
}

/// The starting formation: two rows, one alien every four columns.
pub fn formation() -> Vec<Alien> {
    let mut aliens = Vec::new();
    for y in 0..FORMATION_ROWS {
        for x in (FORMATION_LEFT..WIDTH - 2).step_by(FORMATION_SPACING) {
            aliens.push(Position::new(x, y));
        }
    }
    aliens
}
