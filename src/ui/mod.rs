pub mod animation;
pub mod board;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub const LEGEND: &str = "← → to move | space to shoot | q to quit";

/// Everything drawn in one frame: legend, score, then the board or the
/// end-game animation.
pub fn screen_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(LEGEND, Style::default().fg(Color::DarkGray)),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.state.score.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    match &app.animation {
        Some(animation) => lines.extend(animation.lines()),
        None => lines.extend(board::board_lines(&app.state)),
    }
    lines
}

pub fn render(frame: &mut Frame, app: &App) {
    frame.render_widget(Paragraph::new(screen_lines(app)), frame.area());
}
