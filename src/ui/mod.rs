mod grid;
mod help;
mod helpers;
mod swatch;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView, CountPopup};
use theme::Theme;

pub use grid::grid_columns;
use helpers::clamp_text;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    let header = Paragraph::new(Text::from(header_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    match app.view {
        AppView::Help => {
            let body = Paragraph::new(help::build_help_text())
                .style(Style::default().fg(Theme::text()))
                .alignment(Alignment::Left)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(Style::default().fg(Theme::secondary()))
                        .title(" Help "),
                );
            frame.render_widget(body, layout[1]);
        }
        AppView::Grid => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(grid_title(app, layout[1]));
            let inner = block.inner(layout[1]);
            frame.render_widget(block, layout[1]);
            if app.gradients.is_empty() {
                frame.render_widget(
                    Paragraph::new("No gradients. Press space to generate."),
                    inner,
                );
            } else {
                grid::render_grid(frame, inner, app);
            }
        }
    }

    let footer = Paragraph::new(Text::from(footer_lines(app, layout[2].width)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if let Some(popup) = &app.count_popup {
        render_count_popup(frame, popup, app.status.as_deref());
    }
}

fn header_line(app: &App) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            "  gradr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "gradient generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("count ", Style::default().fg(Theme::dim())),
        Span::styled(
            app.request.count.to_string(),
            Style::default().fg(Theme::accent()),
        ),
        Span::styled("  kind ", Style::default().fg(Theme::dim())),
        Span::styled(
            app.request.kind.label(),
            Style::default().fg(Theme::accent()),
        ),
        Span::styled("  mode ", Style::default().fg(Theme::dim())),
        Span::styled(
            app.request.mode.label(),
            Style::default().fg(Theme::accent()),
        ),
    ])
}

fn grid_title(app: &App, area: Rect) -> String {
    let columns = app.columns.max(1);
    let (first_row, last_row) = grid::visible_rows(app, area.height.saturating_sub(2));
    let first = first_row * columns + 1;
    let last = (last_row * columns).min(app.gradients.len());
    format!(" Gradients {first}-{last} of {} ", app.gradients.len())
}

fn footer_lines(app: &App, width: u16) -> Vec<Line<'_>> {
    let width = usize::from(width.saturating_sub(4));
    let declaration = match app.selected() {
        Some(descriptor) => Line::from(Span::styled(
            clamp_text(&descriptor.declaration, width),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "No gradient selected",
            Style::default().fg(Theme::dim()),
        )),
    };

    let second = if let Some(status) = &app.status {
        Line::from(Span::styled(
            clamp_text(status, width),
            Style::default().fg(Theme::warn()),
        ))
    } else {
        let generated = app
            .generated_at
            .map(|at| format!("Generated {}", at.format("%H:%M:%S")))
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(generated, Style::default().fg(Theme::dim())),
            Span::styled(
                "   Enter: Copy  space: Generate  t: Kind  m: Mode  ?: Help  q: Quit",
                Style::default().fg(Theme::dim()),
            ),
        ])
    };

    vec![declaration, second]
}

fn render_count_popup(frame: &mut Frame, popup: &CountPopup, status: Option<&str>) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Gradient count",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Count: ", Style::default().fg(Theme::dim())),
            Span::styled(
                format!("{}_", popup.input),
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(status) = status {
        lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Theme::warn()),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter: apply. Esc: cancel.",
        Style::default().fg(Theme::dim()),
    )));

    let popup = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Count "),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let config = Config {
            count: NonZeroUsize::new(5).unwrap(),
            ..Config::default()
        };
        let mut app = App::with_rng(
            &config,
            Box::new(MemoryClipboard::default()),
            StdRng::seed_from_u64(12),
        );
        app.set_columns(grid_columns(100));
        app
    }

    #[test]
    fn grid_view_shows_settings_and_selected_declaration() {
        let app = app();
        let screen = render(&app);
        assert!(screen.contains("gradr"));
        assert!(screen.contains("count 5"));
        assert!(screen.contains("kind Linear"));
        assert!(screen.contains("Gradients 1-5 of 5"));
        assert!(screen.contains("background: linear-gradient("));
        assert!(screen.contains(" Copy "));
    }

    #[test]
    fn help_view_lists_bindings() {
        let mut app = app();
        app.view = AppView::Help;
        let screen = render(&app);
        assert!(screen.contains("Key bindings"));
        assert!(screen.contains("Multi Color"));
    }

    #[test]
    fn count_popup_is_drawn() {
        let mut app = app();
        app.count_popup = Some(CountPopup {
            input: "42".to_string(),
        });
        let screen = render(&app);
        assert!(screen.contains("Gradient count"));
        assert!(screen.contains("42_"));
    }
}
