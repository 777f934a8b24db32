pub mod details_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use header::render_header;
use input_form::render_input_form;
use keybindings::{render_keybindings, render_status_line};
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm, render_settings};
use ratatui::{widgets::Block, Frame};
use styles::Palette;

/// Main render function - draws the entire UI from the current state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::for_theme(app.theme);
    let layout = create_layout(size);

    // Paint the theme background first
    f.render_widget(Block::default().style(palette.default_style()), size);

    render_keybindings(f, app, layout.keybindings_area, &palette);
    render_header(f, app, layout.header_area, &palette);
    render_list_pane(f, app, layout.list_area, &palette);
    render_details_pane(f, app, layout.details_area, &palette);
    render_status_line(f, app, layout.status_area, &palette);

    match app.ui_mode {
        UiMode::EditingTask => render_input_form(f, app, size, &palette),
        UiMode::Settings => render_settings(f, app, size, &palette),
        UiMode::Confirming => render_confirm(f, app, size, &palette),
        UiMode::Normal | UiMode::Searching => {}
    }
}
