use ratatui::style::{Color, Modifier, Style};

/// Neon-green terminal theme.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    // Plot colors, picked to stand out against the neon foreground.
    pub const CONTOUR: Color = Color::Rgb(0, 120, 0);
    pub const PATH: Color = Color::Rgb(0, 255, 255);
    pub const CURRENT: Color = Color::Rgb(255, 0, 255);
    pub const OPTIMUM: Color = Color::Rgb(255, 255, 0);
    pub const DIVERGED: Color = Color::Rgb(255, 70, 70);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    /// Titles (bold neon).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::DIVERGED)
            .add_modifier(Modifier::BOLD)
    }
}
