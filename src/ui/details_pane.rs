use crate::app::AppState;
use crate::domain::deadline_label;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" Details ", palette.title_style()))
        .style(palette.default_style());

    let Some(task) = app.selected_task() else {
        let empty = Paragraph::new(Line::styled("No task selected", palette.muted_style())).block(block);
        f.render_widget(empty, area);
        return;
    };

    let label = palette.title_style();
    let mut lines = vec![
        Line::from(vec![Span::styled("Name:     ", label), Span::raw(task.name.as_str())]),
        Line::from(vec![Span::styled("Course:   ", label), Span::raw(task.course_label())]),
        Line::from(vec![Span::styled("Deadline: ", label), Span::raw(deadline_label(task))]),
    ];

    let priority_style = if task.is_high_priority() {
        palette.priority_style()
    } else {
        palette.default_style()
    };
    lines.push(Line::from(vec![
        Span::styled("Priority: ", label),
        Span::styled(task.priority.label(), priority_style),
    ]));

    let (status, status_style) = if task.done {
        ("Done", palette.done_style())
    } else {
        ("Pending", palette.default_style())
    };
    lines.push(Line::from(vec![
        Span::styled("Status:   ", label),
        Span::styled(status, status_style),
    ]));
    lines.push(Line::raw(""));

    if task.notes.trim().is_empty() {
        lines.push(Line::styled("Notes: (empty)", palette.muted_style()));
    } else {
        lines.push(Line::styled("Notes:", label));
        for note_line in task.notes.lines() {
            lines.push(Line::raw(format!("  {}", note_line)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
