use crate::app::AppState;
use crate::domain::{SortBy, Theme};
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the settings dialog: theme and sort selection
pub fn render_settings(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let modal_area = create_modal_area(area, 14);
    f.render_widget(Clear, modal_area);

    let key_style = palette.modal_title_style();
    let current = |active: bool| if active { " ← Current" } else { "" };

    let mut lines = vec![
        Line::raw(""),
        Line::raw("  Theme:"),
        Line::from(vec![
            Span::styled("  [l]", key_style),
            Span::raw(format!(" Light{}", current(app.theme == Theme::Light))),
        ]),
        Line::from(vec![
            Span::styled("  [d]", key_style),
            Span::raw(format!(" Dark{}", current(app.theme == Theme::Dark))),
        ]),
        Line::raw(""),
        Line::raw("  Sort by:"),
    ];

    for (idx, sort) in SortBy::all().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}]", idx + 1), key_style),
            Span::raw(format!(" {}{}", sort.label(), current(*sort == app.sort_by))),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", key_style),
        Span::raw(" Close"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", key_style))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the confirmation modal for a pending destructive action
pub fn render_confirm(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let Some(pending) = &app.pending_confirm else {
        return;
    };
    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let key_style = palette.modal_title_style();
    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", pending.prompt)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", key_style),
            Span::raw(" Yes  "),
            Span::styled("[n]", key_style),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Confirm ", palette.error_style()))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
