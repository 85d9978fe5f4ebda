use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::gradient::GradientKind;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "esc: Close help / quit",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Grid"));
    lines.extend(section_lines(&[
        "Arrows or h/j/k/l: Move selection",
        "Enter or y: Copy the selected declaration",
        "space or g: Generate a new set",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Settings"));
    lines.extend(section_lines(&[
        "+/-: Add or remove one gradient",
        "n: Type a gradient count",
        "t: Next gradient kind",
        "m: Toggle color mode (hsl/hex)",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Kinds"));
    let kinds = GradientKind::ALL
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ");
    lines.extend(section_lines(&[kinds.as_str()]));

    lines.push(Line::from(""));
    lines.push(section_title("Popups"));
    lines.extend(section_lines(&["Count: type a number, Enter apply, Esc cancel"]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
