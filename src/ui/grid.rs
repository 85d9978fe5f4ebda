use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::swatch::Swatch;
use super::theme::Theme;
use crate::app::App;

/// Swatch footprint in cells, border included.
pub const SWATCH_WIDTH: u16 = 18;
pub const SWATCH_HEIGHT: u16 = 6;

/// Number of swatches that fit next to each other in a terminal `width`
/// cells wide (the grid block's own border is taken off first).
pub fn grid_columns(width: u16) -> usize {
    usize::from((width.saturating_sub(2) / SWATCH_WIDTH).max(1))
}

/// First and last (exclusive) row shown so the selected swatch stays visible.
pub fn visible_rows(app: &App, height: u16) -> (usize, usize) {
    let columns = app.columns.max(1);
    let total_rows = app.gradients.len().div_ceil(columns);
    let visible = usize::from((height / SWATCH_HEIGHT).max(1));
    let selected_row = app.selected_index / columns;
    let first = selected_row.saturating_sub(visible - 1);
    (first, (first + visible).min(total_rows))
}

pub fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let columns = app.columns.max(1);
    let (first_row, last_row) = visible_rows(app, area.height);

    for row in first_row..last_row {
        for col in 0..columns {
            let index = row * columns + col;
            let Some(descriptor) = app.gradients.get(index) else {
                break;
            };
            let rect = Rect {
                x: area.x + col as u16 * SWATCH_WIDTH,
                y: area.y + (row - first_row) as u16 * SWATCH_HEIGHT,
                width: SWATCH_WIDTH,
                height: SWATCH_HEIGHT,
            }
            .intersection(area);
            if rect.is_empty() {
                continue;
            }

            let selected = index == app.selected_index;
            let border_style = if selected {
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(format!(" {} ", index + 1));
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            frame.render_widget(Swatch { descriptor }, inner);

            if let Some(label) = swatch_label(app, index) {
                if inner.height == 0 {
                    continue;
                }
                let label_area = Rect {
                    y: inner.y + inner.height - 1,
                    height: 1,
                    ..inner
                };
                frame.render_widget(
                    Paragraph::new(Line::from(label)).alignment(Alignment::Center),
                    label_area,
                );
            }
        }
    }
}

fn swatch_label(app: &App, index: usize) -> Option<Span<'static>> {
    if app.copied.is_copied(index) {
        return Some(Span::styled(
            " ✓ Copied! ",
            Style::default()
                .fg(Color::Black)
                .bg(Theme::success())
                .add_modifier(Modifier::BOLD),
        ));
    }
    if index == app.selected_index {
        return Some(Span::styled(
            " Copy ",
            Style::default().fg(Color::Black).bg(Theme::text()),
        ));
    }
    None
}
