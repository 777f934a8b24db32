use crate::domain::{count_summary, deadline_label, SortBy, Task, TaskView};
use crate::persistence::atomic_write;
use anyhow::Result;
use std::path::Path;

/// Escape text for insertion into HTML markup
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for one task card. Every task-derived value is escaped.
fn render_task(task: &Task) -> String {
    let class = if task.done { "task done" } else { "task" };
    let mut html = format!(
        "<article class=\"{}\" data-id=\"{}\">\n",
        class,
        escape_html(&task.id)
    );
    html.push_str(&format!("  <h3>{}</h3>\n", escape_html(&task.name)));
    html.push_str(&format!(
        "  <div class=\"meta\"><strong>{}</strong> • Deadline: {}</div>\n",
        escape_html(task.course_label()),
        escape_html(&deadline_label(task))
    ));
    if !task.notes.is_empty() {
        html.push_str(&format!("  <div class=\"notes\">{}</div>\n", escape_html(&task.notes)));
    }
    let status = if task.done { "✔ Done" } else { "⬜ Pending" };
    html.push_str(&format!("  <div class=\"status\">{}</div>\n", status));
    if task.is_high_priority() {
        html.push_str("  <div class=\"priority\">⚠ High priority</div>\n");
    }
    html.push_str("</article>\n");
    html
}

/// Render a derived view as a standalone HTML page
pub fn render_html(view: &TaskView, sort_by: SortBy) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Coursework</title>\n</head>\n<body>\n");
    html.push_str(&format!(
        "<p class=\"count\">{} • sorted by {}</p>\n",
        escape_html(&count_summary(view)),
        sort_by.as_key()
    ));

    if view.is_empty() {
        html.push_str("<div class=\"empty\">No matching tasks.</div>\n");
    } else {
        html.push_str("<section id=\"list\">\n");
        for task in &view.visible {
            html.push_str(&render_task(task));
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Write the rendered page to `path`
pub fn export_html<P: AsRef<Path>>(view: &TaskView, sort_by: SortBy, path: P) -> Result<()> {
    atomic_write(path, &render_html(view, sort_by))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive_view, Filter, Priority};

    fn task(name: &str, course: &str, notes: &str) -> Task {
        Task::new(
            name.to_string(),
            course.to_string(),
            Some("2025-01-10".to_string()),
            Priority::High,
            notes.to_string(),
        )
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_escapes_task_text() {
        let tasks = vec![task(
            "<script>alert(1)</script>",
            "R&D",
            "use \"quotes\"",
        )];
        let view = derive_view(&tasks, "", Filter::All, SortBy::Deadline);
        let html = render_html(&view, SortBy::Deadline);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("R&amp;D"));
        assert!(html.contains("use &quot;quotes&quot;"));
        assert!(html.contains("10 Januari 2025"));
        assert!(html.contains("High priority"));
    }

    #[test]
    fn test_render_empty_view() {
        let tasks: Vec<Task> = Vec::new();
        let view = derive_view(&tasks, "", Filter::All, SortBy::Name);
        let html = render_html(&view, SortBy::Name);
        assert!(html.contains("No matching tasks."));
        assert!(html.contains("0 tasks • 0 done"));
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.html");
        let tasks = vec![task("Essay", "", "")];
        let view = derive_view(&tasks, "", Filter::All, SortBy::Deadline);

        export_html(&view, SortBy::Deadline, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<h3>Essay</h3>"));
    }
}
