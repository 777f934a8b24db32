use crate::app::AppState;
use crate::domain::{deadline_label, Task};
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Shown when search and filter leave nothing visible
pub const EMPTY_MESSAGE: &str = "No matching tasks.";

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let view = app.view();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" Tasks ", palette.title_style()))
        .style(palette.default_style());

    if view.is_empty() {
        let empty = Paragraph::new(Line::styled(EMPTY_MESSAGE, palette.muted_style()))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, palette);
            let style = if idx == app.selected_index {
                palette.selected_style()
            } else {
                palette.default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    // ListState keeps the selected row scrolled into view
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    let list = List::new(items).block(block);

    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single row for a task
/// Format: [✔] Write proposal · Course · 10 Januari 2025 ⚠ High
pub fn create_task_line(task: &Task, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();

    let check = if task.done { "[✔] " } else { "[ ] " };
    spans.push(Span::raw(check));

    let name_style = if task.done {
        palette.done_style()
    } else {
        palette.default_style()
    };
    spans.push(Span::styled(task.name.clone(), name_style));

    spans.push(Span::styled(
        format!("  · {} · {}", task.course_label(), deadline_label(task)),
        palette.muted_style(),
    ));

    if task.is_high_priority() {
        spans.push(Span::styled("  ⚠ High", palette.priority_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Theme};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_task_line() {
        let palette = Palette::for_theme(Theme::Light);
        let task = Task::new(
            "Laporan".to_string(),
            String::new(),
            Some("2025-01-10".to_string()),
            Priority::High,
            String::new(),
        );
        let text = line_text(&create_task_line(&task, &palette));

        assert!(text.starts_with("[ ] Laporan"));
        assert!(text.contains("General"));
        assert!(text.contains("10 Januari 2025"));
        assert!(text.contains("High"));
    }

    #[test]
    fn test_done_task_line_keeps_raw_bad_date() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut task = Task::new(
            "Essay".to_string(),
            "Bahasa".to_string(),
            Some("besok".to_string()),
            Priority::Normal,
            String::new(),
        );
        task.done = true;
        let text = line_text(&create_task_line(&task, &palette));

        assert!(text.starts_with("[✔] Essay"));
        assert!(text.contains("besok"));
        assert!(!text.contains("High"));
    }
}
