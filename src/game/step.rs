//! The per-tick simulation.
//!
//! Only bullets move. Collisions compare post-move player bullets against the
//! aliens as they stood at the start of the tick; the terminal checks run last
//! so a single tick never reports more than one reason.

use rand::Rng;
use tracing::{debug, info};

use super::entity::{Bullet, Position};
use super::geometry::{breach_row, ship_row, ALIEN_FIRE_INTERVAL, HEIGHT, POINTS_PER_ALIEN};
use super::state::GameState;

/// Why a step ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    ShipHit,
    Breach,
    Cleared,
}

/// Advance the game by one tick using `state.tick` for the fire cadence.
///
/// Returns the reason the game ended, if it did. A finished game is left
/// untouched.
pub fn step<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<Ending> {
    if state.game_over {
        return None;
    }

    let moved_bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .map(|b| b.moved(-1))
        .filter(|b| b.pos.y >= 0)
        .collect();

    let moved_alien_bullets: Vec<Bullet> = state
        .alien_bullets
        .iter()
        .map(|b| b.moved(1))
        .filter(|b| b.pos.y < HEIGHT)
        .collect();

    let hits: Vec<Position> = moved_bullets
        .iter()
        .map(|b| b.pos)
        .filter(|pos| state.aliens.contains(pos))
        .collect();

    // Breach is judged on the formation before this tick's removals.
    let breached = state.aliens.iter().any(|a| a.y >= breach_row());

    if hits.is_empty() {
        state.bullets = moved_bullets;
    } else {
        // Stacked bullets can share a hit cell; score per alien removed.
        let before = state.aliens.len();
        state.aliens.retain(|a| !hits.contains(a));
        state.score += POINTS_PER_ALIEN * (before - state.aliens.len()) as u32;
        state.bullets = moved_bullets
            .into_iter()
            .filter(|b| !hits.contains(&b.pos))
            .collect();
        debug!(hits = hits.len(), score = state.score, remaining = state.aliens.len(), "aliens destroyed");
    }

    state.alien_bullets = moved_alien_bullets;

    if state.tick % ALIEN_FIRE_INTERVAL == 0 && !state.aliens.is_empty() {
        let shooter = state.aliens[rng.gen_range(0..state.aliens.len())];
        state.alien_bullets.push(Bullet::at(shooter.x, shooter.y + 1));
        debug!(tick = state.tick, x = shooter.x, y = shooter.y, "alien fired");
    }

    let ship = Position::new(state.ship.x, ship_row());
    let ending = if state.alien_bullets.iter().any(|b| b.pos == ship) {
        Some(Ending::ShipHit)
    } else if breached {
        Some(Ending::Breach)
    } else if state.aliens.is_empty() {
        Some(Ending::Cleared)
    } else {
        None
    };

    if let Some(reason) = ending {
        state.game_over = true;
        info!(?reason, tick = state.tick, score = state.score, "game over");
    }
    ending
}
