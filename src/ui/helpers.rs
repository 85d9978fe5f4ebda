use ratatui::style::Color;

pub fn to_term_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Shorten `value` to at most `width` characters, marking the cut with `..`.
pub fn clamp_text(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return value.to_string();
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_text_keeps_short_values() {
        assert_eq!(clamp_text("background: red;", 40), "background: red;");
    }

    #[test]
    fn clamp_text_marks_cut() {
        assert_eq!(clamp_text("linear-gradient(90deg)", 8), "linear..");
    }
}
