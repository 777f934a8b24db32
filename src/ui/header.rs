use crate::app::AppState;
use crate::domain::{count_summary, Filter, UiMode};
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search box, filter tabs, sort label and counts
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let view = app.view();
    let searching = app.ui_mode == UiMode::Searching;

    let mut spans = vec![Span::styled(" Search: ", palette.title_style())];
    if app.search.is_empty() && !searching {
        spans.push(Span::styled("press / to search", palette.muted_style()));
    } else {
        spans.push(Span::raw(app.search.clone()));
    }
    if searching {
        spans.push(Span::styled("█", palette.title_style())); // Cursor
    }

    spans.push(Span::raw("   "));
    for filter in Filter::all() {
        let style = if *filter == app.filter {
            palette.selected_style()
        } else {
            palette.muted_style()
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    spans.push(Span::styled(
        format!("   Sort: {} ⌄   ", app.sort_by.label()),
        palette.default_style(),
    ));
    spans.push(Span::styled(count_summary(&view), palette.muted_style()));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(Span::styled(" Coursework ", palette.title_style()))
            .style(palette.default_style()),
    );

    f.render_widget(header, area);
}
