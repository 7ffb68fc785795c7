use std::time::Duration;

/// Board width in cells.
pub const WIDTH: i32 = 30;
/// Board height in cells. The ship lives on the last row.
pub const HEIGHT: i32 = 10;

pub const TICK_RATE: Duration = Duration::from_millis(200);
pub const ANIMATION_RATE: Duration = Duration::from_millis(150);
pub const EXIT_DELAY: Duration = Duration::from_secs(3);

/// An alien fires whenever `tick % ALIEN_FIRE_INTERVAL == 0`.
pub const ALIEN_FIRE_INTERVAL: u64 = 5;
pub const POINTS_PER_ALIEN: u32 = 100;

pub const FORMATION_ROWS: i32 = 2;
pub const FORMATION_LEFT: i32 = 2;
pub const FORMATION_SPACING: usize = 4;

pub const LEFT_BORDER: &str = "│";
pub const RIGHT_BORDER: &str = "│";

pub fn top_border() -> String {
    format!("┌{}┐", "─".repeat(WIDTH as usize))
}

pub fn bottom_border() -> String {
    format!("└{}┘", "─".repeat(WIDTH as usize))
}

/// Row the ship sits on.
pub const fn ship_row() -> i32 {
    HEIGHT - 1
}

/// Aliens at or below this row have breached the defence line.
pub const fn breach_row() -> i32 {
    HEIGHT - 2
}
