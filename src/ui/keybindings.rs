use crate::app::{AppState, NotificationKind};
use crate::domain::UiMode;
use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current mode
fn hints(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " ↑/↓ select   ",
            "Enter done   ",
            "a add   ",
            "e edit   ",
            "x delete   ",
            "/ search   ",
            "1/2/3 filter   ",
            "s sort   ",
            "o settings   ",
            "R reset   ",
            "q quit",
        ],
        UiMode::Searching => vec![" type to search   ", "Enter keep   ", "Esc clear"],
        UiMode::EditingTask => vec![
            " Tab/Shift+Tab field   ",
            "Space priority   ",
            "Enter save   ",
            "Esc cancel",
        ],
        UiMode::Settings => vec![" l/d theme   ", "1/2/3 sort   ", "Esc close"],
        UiMode::Confirming => vec![" y confirm   ", "n/Esc cancel"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let line = Line::from(hints(app.ui_mode).into_iter().map(Span::raw).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(palette.hint_style());
    f.render_widget(paragraph, area);
}

/// Render the transient notification line
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let Some(notification) = &app.notification else {
        return;
    };
    let style = match notification.kind {
        NotificationKind::Info => palette.title_style(),
        NotificationKind::Error => palette.error_style(),
    };
    let paragraph = Paragraph::new(Line::styled(format!(" {}", notification.message), style));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_hints() {
        for mode in [
            UiMode::Normal,
            UiMode::Searching,
            UiMode::EditingTask,
            UiMode::Settings,
            UiMode::Confirming,
        ] {
            assert!(!hints(mode).is_empty());
        }
    }
}
