use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Copied marker
    pub fn success() -> Color {
        Color::Green
    }

    /// Validation and clipboard problems
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Selected swatch border
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for numbers/counts
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
