use crate::app::{AppState, Intent};
use crate::domain::{Filter, FormField, SortBy, Theme, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key press. Returns true when the application should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Searching => {
            handle_search_mode(app, key);
            false
        }
        UiMode::EditingTask => {
            handle_form_mode(app, key);
            false
        }
        UiMode::Settings => {
            handle_settings_mode(app, key);
            false
        }
        UiMode::Confirming => {
            handle_confirm_mode(app, key);
            false
        }
    }
}

/// Apply an intent, surfacing failures in the status line
fn send(app: &mut AppState, intent: Intent) {
    if let Err(e) = app.apply(intent) {
        app.report_error(&e);
    }
}

/// Destructive intents go through the confirmation modal first
fn send_confirmed(app: &mut AppState, intent: Intent) {
    app.request_confirmation(intent);
}

fn next_filter(filter: Filter) -> Filter {
    match filter {
        Filter::All => Filter::Done,
        Filter::Done => Filter::Pending,
        Filter::Pending => Filter::All,
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle done
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.selected_task_id() {
                send(app, Intent::ToggleDone(id));
            }
        }

        // Add / edit / delete
        KeyCode::Char('a') | KeyCode::Char('n') => send(app, Intent::OpenAdd),
        KeyCode::Char('`') => send(app, Intent::OpenAdd),
        KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(id) = app.selected_task_id() {
                send(app, Intent::OpenEdit(id));
            }
        }
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                send_confirmed(app, Intent::Delete(id));
            }
        }

        // Search
        KeyCode::Char('/') => app.ui_mode = UiMode::Searching,

        // Filters
        KeyCode::Char('1') => send(app, Intent::SetFilter(Filter::All)),
        KeyCode::Char('2') => send(app, Intent::SetFilter(Filter::Done)),
        KeyCode::Char('3') => send(app, Intent::SetFilter(Filter::Pending)),
        KeyCode::Char('f') => {
            let filter = next_filter(app.filter);
            send(app, Intent::SetFilter(filter));
        }

        // Sort cycle
        KeyCode::Char('s') => send(app, Intent::CycleSort),

        // Settings
        KeyCode::Char('o') | KeyCode::Char(',') => send(app, Intent::OpenSettings),

        // Reset everything
        KeyCode::Char('R') => send_confirmed(app, Intent::ResetAll),

        // Clear search
        KeyCode::Esc => {
            if !app.search.is_empty() {
                send(app, Intent::SetSearch(String::new()));
            }
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing in the search box. Every keystroke re-derives the list.
fn handle_search_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.ui_mode = UiMode::Normal,
        KeyCode::Esc => {
            send(app, Intent::SetSearch(String::new()));
            app.ui_mode = UiMode::Normal;
        }
        KeyCode::Backspace => {
            let mut search = app.search.clone();
            search.pop();
            send(app, Intent::SetSearch(search));
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let search = format!("{}{}", app.search, c);
            send(app, Intent::SetSearch(search));
        }
        _ => {}
    }
}

/// Handle keys in the add/edit dialog
fn handle_form_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => send(app, Intent::SaveForm),
        KeyCode::Esc => send(app, Intent::CancelForm),
        _ => {
            let Some(form) = app.form.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Tab => form.next_field(),
                KeyCode::BackTab => form.prev_field(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Left | KeyCode::Right if form.focus == FormField::Priority => {
                    form.toggle_priority()
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.input_char(c)
                }
                _ => {}
            }
        }
    }
}

/// Handle keys in the settings dialog
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Char('L') => send(app, Intent::SetTheme(Theme::Light)),
        KeyCode::Char('d') | KeyCode::Char('D') => send(app, Intent::SetTheme(Theme::Dark)),
        KeyCode::Char('1') => send(app, Intent::SetSort(SortBy::Deadline)),
        KeyCode::Char('2') => send(app, Intent::SetSort(SortBy::Name)),
        KeyCode::Char('3') => send(app, Intent::SetSort(SortBy::Status)),
        KeyCode::Esc | KeyCode::Char('q') => send(app, Intent::CloseSettings),
        _ => {}
    }
}

/// Handle keys in the confirmation modal
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) {
    let answer = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return,
    };
    if let Err(e) = app.answer_confirmation(answer) {
        app.report_error(&e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Task};
    use crate::persistence::Store;

    fn create_test_app() -> AppState {
        let mut store = Store::in_memory();
        let report = Task::new(
            "Report".to_string(),
            "IMK".to_string(),
            Some("2025-01-10".to_string()),
            Priority::Normal,
            String::new(),
        );
        let mut essay = Task::new(
            "Essay".to_string(),
            String::new(),
            Some("2025-01-05".to_string()),
            Priority::High,
            String::new(),
        );
        essay.done = true;
        store.save(&[report, essay]).unwrap();
        AppState::new(store)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::EditingTask);

        type_text(&mut app, "New");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "Kalkulus");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "2025-02-01");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char(' ')));

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 3);
        let added = &app.tasks[0];
        assert_eq!(added.name, "New");
        assert_eq!(added.course, "Kalkulus");
        assert_eq!(added.deadline.as_deref(), Some("2025-02-01"));
        assert_eq!(added.priority, Priority::High);
    }

    #[test]
    fn test_handle_add_empty_name_keeps_dialog_open() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.ui_mode, UiMode::EditingTask);
        assert!(app.form.as_ref().unwrap().error.is_some());
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn test_handle_delete_requires_confirmation() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.ui_mode, UiMode::Confirming);
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.ui_mode, UiMode::Normal);

        handle_key(&mut app, key(KeyCode::Delete));
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_handle_toggle_selected() {
        let mut app = create_test_app();
        // Deadline order puts Essay (done) first
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.tasks[1].done);
    }

    #[test]
    fn test_handle_search_typing() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('/')));
        type_text(&mut app, "imk");
        assert_eq!(app.search, "imk");
        assert_eq!(app.view().visible.len(), 1);

        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search, "im");

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.search, "");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_filter_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.filter, Filter::Pending);
        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn test_handle_settings() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.ui_mode, UiMode::Settings);
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn test_handle_reset_declined() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('R')));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.tasks.len(), 2);
    }
}
