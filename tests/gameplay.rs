//! End-to-end games driven through `App`, rendered with ratatui's test backend.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use tui_invaders::app::App;
use tui_invaders::clock::TimerId;
use tui_invaders::game::geometry::{EXIT_DELAY, HEIGHT, WIDTH};
use tui_invaders::game::{Bullet, Outcome, Position};
use tui_invaders::ui;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn started(seed: u64) -> (App, Instant) {
    let mut app = App::new(StdRng::seed_from_u64(seed));
    let t0 = Instant::now();
    app.start(t0);
    (app, t0)
}

fn screen(app: &App) -> Vec<String> {
    let backend = TestBackend::new(WIDTH as u16 + 12, HEIGHT as u16 + 4);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[test]
fn first_frame_shows_legend_score_and_board() {
    let (app, _) = started(1);
    let rows = screen(&app);

    assert_eq!(rows[0], ui::LEGEND);
    assert_eq!(rows[1], "Score: 0");
    assert_eq!(rows[2], format!("┌{}┐", "─".repeat(WIDTH as usize)));
    assert_eq!(rows[3].matches('@').count(), 7);
    assert_eq!(rows[4].matches('@').count(), 7);
    assert!(rows[12].contains('^'));
    assert_eq!(rows[13], format!("└{}┘", "─".repeat(WIDTH as usize)));
}

#[test]
fn aimed_shot_removes_one_alien_for_one_hundred() {
    let (mut app, t0) = started(2);
    app.state.alien_bullets.clear();

    // Ship starts at x = 15; the nearest column of aliens is x = 14.
    app.on_key(press(KeyCode::Left));
    app.on_key(press(KeyCode::Char(' ')));

    // Bullet spawns on row 8 and needs seven ticks to reach row 1.
    for _ in 0..7 {
        app.state.alien_bullets.clear();
        app.on_tick(t0);
    }

    assert_eq!(app.state.score, 100);
    assert_eq!(app.state.aliens.len(), 13);
    assert!(!app.state.aliens.contains(&Position::new(14, 1)));
    assert!(app.state.bullets.is_empty());
    assert_eq!(screen(&app)[1], "Score: 100");
}

#[test]
fn double_shot_at_one_alien_scores_once() {
    let (mut app, t0) = started(8);
    app.on_key(press(KeyCode::Left));
    app.on_key(press(KeyCode::Char(' ')));
    app.on_key(press(KeyCode::Char(' ')));

    for _ in 0..7 {
        app.state.alien_bullets.clear();
        app.on_tick(t0);
    }

    assert_eq!(app.state.aliens.len(), 13);
    assert_eq!(app.state.score, 100 * (14 - app.state.aliens.len() as u32));
    assert!(app.state.bullets.is_empty());
}

#[test]
fn alien_bullet_on_ship_renders_lose_animation() {
    let (mut app, t0) = started(3);
    app.state.alien_bullets = vec![Bullet::at(app.state.ship.x, HEIGHT - 2)];
    app.on_tick(t0);

    assert_eq!(app.state.outcome(), Some(Outcome::Lost));
    let rows = screen(&app);
    assert!(rows.iter().any(|r| r.contains("GAME OVER")));
    assert!(!rows.iter().any(|r| r.contains('┌')));
}

#[test]
fn clearing_the_formation_renders_win_animation() {
    let (mut app, t0) = started(4);
    let last = Position::new(26, 0);
    app.state.aliens = vec![last];
    app.state.alien_bullets.clear();
    app.state.bullets = vec![Bullet::at(last.x, last.y + 1), Bullet::at(3, 6)];
    app.on_tick(t0);

    assert_eq!(app.state.outcome(), Some(Outcome::Won));
    assert_eq!(app.state.bullets, vec![Bullet::at(3, 5)]);
    let rows = screen(&app);
    assert!(rows.iter().any(|r| r.contains("YOU WIN!")));
    assert!(rows.iter().any(|r| r.contains("Thanks for saving the galaxy!")));
}

#[test]
fn end_game_runs_until_exit_timer() {
    let (mut app, t0) = started(5);
    app.state.aliens.clear();
    app.on_tick(t0);
    assert!(app.state.game_over);

    let mut frames = 0;
    let mut now = t0;
    while !app.should_quit {
        now += Duration::from_millis(50);
        while let Some(id) = app.timers.pop_due(now) {
            match id {
                TimerId::Tick => panic!("simulation clock still running after game over"),
                TimerId::Animation => {
                    frames += 1;
                    app.on_frame();
                }
                TimerId::Exit => app.on_exit(),
            }
        }
    }

    assert!(now >= t0 + EXIT_DELAY);
    assert!(frames >= 19);
}

#[test]
fn quit_mid_game_skips_animation() {
    let (mut app, t0) = started(6);
    app.on_tick(t0);
    app.on_key(press(KeyCode::Char('q')));

    assert!(app.should_quit);
    assert!(!app.state.game_over);
    assert!(app.animation.is_none());
    assert!(!app.timers.is_active(TimerId::Exit));
}

#[test]
fn score_tracks_destroyed_aliens_over_a_long_game() {
    let (mut app, t0) = started(7);
    let initial = app.state.aliens.len() as u32;
    let mut seen_removed: Vec<Position> = Vec::new();

    // Sweep left to right firing constantly, dodging nothing.
    for i in 0..400 {
        if app.state.game_over {
            break;
        }
        let key = match i % 3 {
            0 => KeyCode::Char(' '),
            1 if (i / 90) % 2 == 0 => KeyCode::Right,
            1 => KeyCode::Left,
            _ => KeyCode::Char(' '),
        };
        app.on_key(press(key));
        let before = app.state.aliens.clone();
        app.on_tick(t0);

        assert!((0..WIDTH).contains(&app.state.ship.x));
        assert_eq!(app.state.score % 100, 0);
        assert_eq!(app.state.score, 100 * (initial - app.state.aliens.len() as u32));
        for gone in before.iter().filter(|a| !app.state.aliens.contains(a)) {
            seen_removed.push(*gone);
        }
        assert!(seen_removed.iter().all(|p| !app.state.aliens.contains(p)));
    }
}
