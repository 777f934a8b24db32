use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
    pub done: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub modal_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Blue,
                danger: Color::Red,
                done: Color::Green,
                selected_fg: Color::White,
                selected_bg: Color::Blue,
                modal_bg: Color::Gray,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::Gray,
                accent: Color::LightCyan,
                danger: Color::LightRed,
                done: Color::LightGreen,
                selected_fg: Color::Black,
                selected_bg: Color::LightCyan,
                modal_bg: Color::DarkGray,
            },
        }
    }

    /// Default text style
    pub fn default_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Selected row highlight style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style for panes
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Secondary text: course, deadline, empty-state message
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn done_style(&self) -> Style {
        Style::default()
            .fg(self.done)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// High-priority marker
    pub fn priority_style(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn modal_bg_style(&self) -> Style {
        Style::default().bg(self.modal_bg).fg(self.fg)
    }

    pub fn modal_title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding hint style
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(Palette::for_theme(Theme::Light), Palette::for_theme(Theme::Dark));
    }

    #[test]
    fn test_selected_is_readable() {
        for theme in [Theme::Light, Theme::Dark] {
            let p = Palette::for_theme(theme);
            assert_ne!(p.selected_fg, p.selected_bg);
        }
    }
}
