//! Terminal space invaders: a static alien formation, a ship on the bottom
//! row and bullets stepping one cell per tick.

pub mod app;
pub mod clock;
pub mod event;
pub mod game;
pub mod term;
pub mod ui;
