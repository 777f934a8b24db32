use crate::app::AppState;
use crate::domain::FormField;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const FIELDS: [FormField; 5] = [
    FormField::Name,
    FormField::Course,
    FormField::Deadline,
    FormField::Priority,
    FormField::Notes,
];

/// Render the add/edit task dialog
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let Some(form) = &app.form else {
        return;
    };
    let modal_area = create_modal_area(area, 20);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];

    for field in FIELDS {
        let focused = form.focus == field;
        let label = if focused {
            format!("{}: (editing)", field.label())
        } else {
            format!("{}:", field.label())
        };
        lines.push(Line::raw(label));

        let value = match form.text(field) {
            Some(text) => text.to_string(),
            None => format!("< {} >", form.priority.label()),
        };
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(value, palette.modal_title_style()),
            if focused && field != FormField::Priority {
                Span::styled("█", palette.modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));
    }

    if let Some(error) = &form.error {
        lines.push(Line::styled(error.clone(), palette.error_style()));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(form.title(), palette.modal_title_style()))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
