pub mod entity;
pub mod geometry;
pub mod input;
pub mod state;
pub mod step;

pub use entity::{Alien, Bullet, Position, Ship};
pub use input::Command;
pub use state::{GameState, Outcome};
pub use step::{step, Ending};
