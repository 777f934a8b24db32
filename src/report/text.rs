use crate::domain::{count_summary, deadline_label, TaskView};

/// Plain-text listing of a derived view, one task per line plus a summary
pub fn render_text(view: &TaskView) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str("No matching tasks.\n");
    }

    for task in &view.visible {
        let check = if task.done { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{} {}  · {} · {}",
            check,
            task.name,
            task.course_label(),
            deadline_label(task)
        ));
        if task.is_high_priority() {
            out.push_str("  ! high");
        }
        out.push('\n');
    }

    out.push_str(&count_summary(view));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive_view, Filter, Priority, SortBy, Task};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text() {
        let mut essay = Task::new(
            "Essay".to_string(),
            "Bahasa".to_string(),
            Some("2025-01-05".to_string()),
            Priority::High,
            String::new(),
        );
        essay.done = true;
        let report = Task::new(
            "Report".to_string(),
            String::new(),
            Some("2025-01-10".to_string()),
            Priority::Normal,
            String::new(),
        );
        let tasks = vec![report, essay];
        let view = derive_view(&tasks, "", Filter::All, SortBy::Deadline);

        assert_eq!(
            render_text(&view),
            "[x] Essay  · Bahasa · 05 Januari 2025  ! high\n\
             [ ] Report  · General · 10 Januari 2025\n\
             2 tasks • 1 done\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        let tasks: Vec<Task> = Vec::new();
        let view = derive_view(&tasks, "", Filter::Done, SortBy::Name);
        assert_eq!(render_text(&view), "No matching tasks.\n0 tasks • 0 done\n");
    }
}
