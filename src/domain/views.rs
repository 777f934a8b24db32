use super::enums::{Filter, SortBy};
use super::task::{Task, DEADLINE_FORMAT};
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Long-form date layout, e.g. "10 Januari 2025"
const LONG_DATE_FORMAT: &str = "%d %B %Y";

/// Locale used for long-form deadline display
const DISPLAY_LOCALE: Locale = Locale::id_ID;

/// The derived, visible projection of the task collection
#[derive(Debug, Clone)]
pub struct TaskView<'a> {
    /// Tasks that passed search and filter, in display order
    pub visible: Vec<&'a Task>,
    /// Size of the full collection
    pub total: usize,
    /// Completed tasks in the full collection
    pub completed: usize,
}

impl<'a> TaskView<'a> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Ids of the visible tasks, in display order
    #[cfg(test)]
    pub fn ids(&self) -> Vec<&'a str> {
        self.visible.iter().map(|&t| t.id.as_str()).collect()
    }
}

/// Derive the visible task list from the full collection.
///
/// Pure: the same inputs always give the same output. Counts are taken over
/// the whole collection, independent of search and filter.
pub fn derive_view<'a>(tasks: &'a [Task], search: &str, filter: Filter, sort_by: SortBy) -> TaskView<'a> {
    let query = search.trim().to_lowercase();

    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.matches(&query))
        .filter(|t| filter.accepts(t.done))
        .collect();

    sort_tasks(&mut visible, sort_by);

    TaskView {
        visible,
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.done).count(),
    }
}

/// Sort in place by the given key.
///
/// Deadline: ascending, tasks without a (valid) deadline after all dated ones.
/// Relative order among undated tasks is not part of the contract.
/// Status: pending before done, otherwise input order.
pub fn sort_tasks(tasks: &mut [&Task], sort_by: SortBy) {
    match sort_by {
        SortBy::Deadline => tasks.sort_by(|a, b| compare_deadlines(a.deadline_date(), b.deadline_date())),
        SortBy::Name => tasks.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortBy::Status => tasks.sort_by_key(|t| t.done),
    }
}

fn compare_deadlines(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Collation-style name ordering. Base letters decide first, ignoring case
/// and accents; then accents; then case, lowercase first; exact text last.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| case_swapped(a).cmp(&case_swapped(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased with combining marks removed: "Ékonomi" -> "ekonomi"
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercased canonical decomposition, marks kept
fn accented(s: &str) -> String {
    s.to_lowercase().nfd().collect()
}

/// Swap case so lowercase letters order before their uppercase form
fn case_swapped(s: &str) -> String {
    s.chars()
        .flat_map(|c| {
            if c.is_lowercase() {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Format a stored deadline for display. Values that are not valid dates are
/// returned verbatim.
pub fn format_deadline(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT) {
        Ok(date) => {
            let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
            midnight.format_localized(LONG_DATE_FORMAT, DISPLAY_LOCALE).to_string()
        }
        Err(_) => raw.to_string(),
    }
}

/// Deadline text for a task, or a dash when there is none
pub fn deadline_label(task: &Task) -> String {
    match task.deadline.as_deref() {
        Some(raw) => format_deadline(raw),
        None => "—".to_string(),
    }
}

/// Summary line shown next to the list: "3 tasks • 1 done"
pub fn count_summary(view: &TaskView) -> String {
    let noun = if view.total == 1 { "task" } else { "tasks" };
    format!("{} {} • {} done", view.total, noun, view.completed)
}
