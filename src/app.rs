use crate::domain::{derive_view, generate_id, Filter, FormField, Priority, SortBy, Task, TaskView, Theme, UiMode};
use crate::persistence::Store;
use crate::ticker::NOTIFICATION_TTL;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A request for a state change, emitted by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ToggleDone(String),
    OpenEdit(String),
    OpenAdd,
    Delete(String),
    SetSearch(String),
    SetFilter(Filter),
    CycleSort,
    SetSort(SortBy),
    SetTheme(Theme),
    ResetAll,
    OpenSettings,
    CloseSettings,
    SaveForm,
    CancelForm,
}

/// Yes/no capability consulted before destructive intents
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// A fixed answer, given ahead of time
#[derive(Debug, Clone, Copy)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Dialog validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("Task name must not be empty")]
    EmptyName,
}

/// Add/edit dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// Id of the task being edited, None when creating
    pub editing_id: Option<String>,
    pub name: String,
    pub course: String,
    pub deadline: String,
    pub priority: Priority,
    pub notes: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl TaskForm {
    fn create() -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            course: String::new(),
            deadline: String::new(),
            priority: Priority::Normal,
            notes: String::new(),
            focus: FormField::Name,
            error: None,
        }
    }

    fn edit(task: &Task) -> Self {
        Self {
            editing_id: Some(task.id.clone()),
            name: task.name.clone(),
            course: task.course.clone(),
            deadline: task.deadline.clone().unwrap_or_default(),
            priority: task.priority,
            notes: task.notes.clone(),
            focus: FormField::Name,
            error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            " Edit Task "
        } else {
            " New Task "
        }
    }

    /// Text buffer of a field; Priority has none
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Course => Some(&self.course),
            FormField::Deadline => Some(&self.deadline),
            FormField::Notes => Some(&self.notes),
            FormField::Priority => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Course => Some(&mut self.course),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Notes => Some(&mut self.notes),
            FormField::Priority => None,
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        match self.focused_text_mut() {
            Some(buf) => buf.push(c),
            None if c == ' ' => self.toggle_priority(),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.focused_text_mut() {
            buf.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_priority(&mut self) {
        self.priority = self.priority.toggled();
    }

    /// Trimmed name, or the reason the form can't be saved
    pub fn validate(&self) -> Result<String, DialogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DialogError::EmptyName);
        }
        Ok(name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Transient status-line message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

/// Destructive intent waiting for the user's answer
#[derive(Debug, Clone)]
pub struct PendingConfirm {
    pub prompt: String,
    pub intent: Intent,
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub sort_by: SortBy,
    pub theme: Theme,
    pub search: String,
    pub filter: Filter,
    pub selected_index: usize, // Index into the visible list
    pub ui_mode: UiMode,
    pub form: Option<TaskForm>,
    pub pending_confirm: Option<PendingConfirm>,
    pub notification: Option<Notification>,
    store: Store,
}

impl AppState {
    /// Build the state from whatever the store holds
    pub fn new(store: Store) -> Self {
        Self {
            tasks: store.load(),
            sort_by: store.sort_by(),
            theme: store.theme(),
            search: String::new(),
            filter: Filter::All,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            form: None,
            pending_confirm: None,
            notification: None,
            store,
        }
    }

    /// Like `new`, but seeds sample tasks when nothing was ever saved
    pub fn open(mut store: Store) -> Result<Self> {
        if !store.has_tasks() {
            let today = Local::now().date_naive();
            info!("no saved tasks found, seeding samples");
            store.save(&sample_tasks(today))?;
        }
        Ok(Self::new(store))
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The visible, ordered projection of the current state
    pub fn view(&self) -> TaskView<'_> {
        derive_view(&self.tasks, &self.search, self.filter, self.sort_by)
    }

    /// Currently selected visible task
    pub fn selected_task(&self) -> Option<&Task> {
        self.view().visible.get(self.selected_index).copied()
    }

    pub fn selected_task_id(&self) -> Option<String> {
        self.selected_task().map(|t| t.id.clone())
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.view().visible.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible list
    fn clamp_selection(&mut self) {
        let len = self.view().visible.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn select_task(&mut self, id: &str) {
        let position = self.view().visible.iter().position(|t| t.id == id);
        if let Some(idx) = position {
            self.selected_index = idx;
        }
    }

    /// Prompt to show before applying `intent`, None if it needs no confirmation
    pub fn confirmation_prompt(&self, intent: &Intent) -> Option<String> {
        match intent {
            Intent::Delete(id) => self
                .find_task(id)
                .map(|t| format!("Delete task \"{}\"?", t.name)),
            Intent::ResetAll => Some("Reset all task data? This cannot be undone.".to_string()),
            _ => None,
        }
    }

    /// Park a destructive intent until the user answers
    pub fn request_confirmation(&mut self, intent: Intent) {
        if let Some(prompt) = self.confirmation_prompt(&intent) {
            self.pending_confirm = Some(PendingConfirm { prompt, intent });
            self.ui_mode = UiMode::Confirming;
        }
    }

    /// Resolve the parked intent with the user's answer
    pub fn answer_confirmation(&mut self, accepted: bool) -> Result<()> {
        self.ui_mode = UiMode::Normal;
        match self.pending_confirm.take() {
            Some(pending) => self.dispatch(pending.intent, &mut Answer(accepted)),
            None => Ok(()),
        }
    }

    /// Apply an intent that never asks for confirmation.
    /// Destructive intents passed here are declined.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        self.dispatch(intent, &mut Answer(false))
    }

    /// Apply an intent to the state, persisting whatever it changes
    pub fn dispatch(&mut self, intent: Intent, confirm: &mut dyn Confirm) -> Result<()> {
        debug!(?intent, "dispatch");
        match intent {
            Intent::ToggleDone(id) => self.toggle_done(&id)?,
            Intent::OpenEdit(id) => self.open_form(Some(&id)),
            Intent::OpenAdd => self.open_form(None),
            Intent::Delete(id) => {
                let Some(prompt) = self.confirmation_prompt(&Intent::Delete(id.clone())) else {
                    return Ok(());
                };
                if confirm.confirm(&prompt) {
                    self.delete_task(&id)?;
                }
            }
            Intent::SetSearch(text) => {
                self.search = text;
                self.selected_index = 0;
            }
            Intent::SetFilter(filter) => {
                self.filter = filter;
                self.selected_index = 0;
            }
            Intent::CycleSort => self.set_sort(self.sort_by.next())?,
            Intent::SetSort(sort_by) => {
                self.set_sort(sort_by)?;
                self.close_settings();
            }
            Intent::SetTheme(theme) => {
                self.set_theme(theme)?;
                self.close_settings();
            }
            Intent::ResetAll => {
                let prompt = self.confirmation_prompt(&Intent::ResetAll).unwrap_or_default();
                if confirm.confirm(&prompt) {
                    self.reset_all()?;
                }
            }
            Intent::OpenSettings => self.ui_mode = UiMode::Settings,
            Intent::CloseSettings => self.close_settings(),
            Intent::SaveForm => self.save_form()?,
            Intent::CancelForm => self.close_form(),
        }
        self.clamp_selection();
        Ok(())
    }

    /// Save `next` and only then make it the in-memory collection
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.store.save(&next)?;
        self.tasks = next;
        Ok(())
    }

    fn toggle_done(&mut self, id: &str) -> Result<()> {
        let mut next = self.tasks.clone();
        let Some(task) = next.iter_mut().find(|t| t.id == id) else {
            warn!(id, "toggle for unknown task");
            return Ok(());
        };
        let done = task.toggle_done();
        self.commit(next)?;
        self.notify(if done { "Task marked done" } else { "Task reopened" });
        Ok(())
    }

    fn delete_task(&mut self, id: &str) -> Result<()> {
        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        if next.len() == self.tasks.len() {
            return Ok(());
        }
        self.commit(next)?;
        info!(id, "task deleted");
        self.notify("Task deleted");
        Ok(())
    }

    fn reset_all(&mut self) -> Result<()> {
        self.commit(Vec::new())?;
        self.selected_index = 0;
        info!("all tasks cleared");
        self.notify("All tasks cleared");
        Ok(())
    }

    fn set_sort(&mut self, sort_by: SortBy) -> Result<()> {
        self.store.set_sort_by(sort_by)?;
        self.sort_by = sort_by;
        Ok(())
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set_theme(theme)?;
        self.theme = theme;
        self.notify(format!("Theme changed: {}", theme.label()));
        Ok(())
    }

    fn close_settings(&mut self) {
        if self.ui_mode == UiMode::Settings {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Open the add/edit dialog; an unknown id opens it in create mode
    fn open_form(&mut self, id: Option<&str>) {
        let form = match id.and_then(|id| self.find_task(id)) {
            Some(task) => TaskForm::edit(task),
            None => TaskForm::create(),
        };
        self.form = Some(form);
        self.ui_mode = UiMode::EditingTask;
    }

    fn close_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Validate and store the dialog contents. A rejected save keeps the
    /// dialog open with focus back on the name field.
    fn save_form(&mut self) -> Result<()> {
        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };

        let name = match form.validate() {
            Ok(name) => name,
            Err(e) => {
                form.error = Some(e.to_string());
                form.focus = FormField::Name;
                return Ok(());
            }
        };

        let form = form.clone();
        let deadline = Some(form.deadline.trim().to_string()).filter(|d| !d.is_empty());
        let course = form.course.trim().to_string();
        let notes = form.notes.trim().to_string();

        let existing = form
            .editing_id
            .as_deref()
            .and_then(|id| self.tasks.iter().position(|t| t.id == id));

        let mut next = self.tasks.clone();
        let (saved_id, message) = match existing {
            Some(idx) => {
                let old = &next[idx];
                let updated = Task {
                    id: old.id.clone(),
                    name,
                    course,
                    deadline,
                    priority: form.priority,
                    notes,
                    done: old.done,
                    created_at: old.created_at.clone(),
                };
                let id = updated.id.clone();
                next[idx] = updated;
                (id, "Task updated")
            }
            None => {
                let mut task = Task::new(name, course, deadline, form.priority, notes);
                task.id = self.unique_id();
                let id = task.id.clone();
                next.insert(0, task);
                (id, "Task added")
            }
        };

        self.commit(next)?;
        self.close_form();
        self.select_task(&saved_id);
        info!(id = %saved_id, "{}", message);
        self.notify(message);
        Ok(())
    }

    /// Fresh id not used by any task in the collection
    fn unique_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.find_task(&id).is_none() {
                return id;
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            kind: NotificationKind::Info,
            shown_at: Instant::now(),
        });
    }

    /// Surface a failed operation in the status line
    pub fn report_error(&mut self, err: &anyhow::Error) {
        warn!(error = %err, "operation failed");
        self.notification = Some(Notification {
            message: format!("Error: {:#}", err),
            kind: NotificationKind::Error,
            shown_at: Instant::now(),
        });
    }

    /// Expire the notification once it has been shown long enough
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTIFICATION_TTL);
        if expired {
            self.notification = None;
        }
    }
}

/// Demo tasks written on first run
pub fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    let in_days = |days: i64| (today + Duration::days(days)).format("%Y-%m-%d").to_string();

    let report = Task::new(
        "Laporan IMK".to_string(),
        "Interaksi Manusia dan Komputer".to_string(),
        Some(in_days(2)),
        Priority::High,
        "Sertakan evaluasi heuristik".to_string(),
    );
    let mut paper = Task::new(
        "Makalah AI".to_string(),
        "Kecerdasan Buatan".to_string(),
        Some(in_days(5)),
        Priority::Normal,
        "Gunakan referensi terbaru".to_string(),
    );
    paper.done = true;

    vec![report, paper]
}
