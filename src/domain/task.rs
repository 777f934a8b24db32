use super::enums::Priority;
use chrono::{Local, NaiveDate, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Date format used for deadlines on disk and in the dialog
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id, never changes after creation
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub course: String,
    /// ISO date string; empty strings on disk load as no deadline
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub done: bool,
    /// RFC 3339 creation timestamp, set once
    pub created_at: String,
}

fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Generate a fresh task id: "t" followed by 7 lowercase alphanumerics
pub fn generate_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("t{}", &simple[..7])
}

impl Task {
    /// Create a new pending task with a fresh id and creation timestamp
    pub fn new(
        name: String,
        course: String,
        deadline: Option<String>,
        priority: Priority,
        notes: String,
    ) -> Self {
        Self {
            id: generate_id(),
            name,
            course,
            deadline,
            priority,
            notes,
            done: false,
            created_at: Local::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Parsed deadline, None when absent or not a valid date
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), DEADLINE_FORMAT).ok())
    }

    /// Case-insensitive substring search over name, course and notes.
    /// `query` must already be lowercased; an empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let haystack = format!("{} {} {}", self.name, self.course, self.notes).to_lowercase();
        haystack.contains(query)
    }

    /// Course label for display, falling back to "General"
    pub fn course_label(&self) -> &str {
        if self.course.trim().is_empty() {
            "General"
        } else {
            &self.course
        }
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Task {
        Task::new(
            "Laporan IMK".to_string(),
            "Interaksi Manusia dan Komputer".to_string(),
            Some("2025-01-10".to_string()),
            Priority::High,
            "Sertakan evaluasi heuristik".to_string(),
        )
    }

    #[test]
    fn test_new_task() {
        let task = sample();
        assert!(!task.done);
        assert!(task.id.starts_with('t'));
        assert_eq!(task.id.len(), 8);
        assert!(chrono::DateTime::parse_from_rfc3339(&task.created_at).is_ok());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_toggle_done_twice() {
        let mut task = sample();
        assert!(task.toggle_done());
        assert!(!task.toggle_done());
        assert!(!task.done);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let task = sample();
        assert!(task.matches(""));
        assert!(task.matches("laporan"));
        assert!(task.matches("manusia"));
        assert!(task.matches("heuristik"));
        assert!(!task.matches("essay"));
    }

    #[test]
    fn test_deadline_date() {
        let mut task = sample();
        assert_eq!(task.deadline_date(), NaiveDate::from_ymd_opt(2025, 1, 10));
        task.deadline = Some("next week".to_string());
        assert_eq!(task.deadline_date(), None);
        task.deadline = None;
        assert_eq!(task.deadline_date(), None);
    }

    #[test]
    fn test_course_label_fallback() {
        let mut task = sample();
        task.course = "  ".to_string();
        assert_eq!(task.course_label(), "General");
    }

    #[test]
    fn test_json_wire_format() {
        let json = r#"{
            "id": "tabc1234",
            "name": "Makalah AI",
            "course": "Kecerdasan Buatan",
            "deadline": "",
            "priority": "normal",
            "notes": "",
            "done": true,
            "createdAt": "2025-01-01T08:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.deadline, None);
        assert_eq!(task.created_at, "2025-01-01T08:00:00.000Z");
        assert!(task.done);

        let out = serde_json::to_value(&task).unwrap();
        assert!(out.get("createdAt").is_some());
        assert_eq!(out["priority"], "normal");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"t1","name":"Bare","createdAt":"2025-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.course, "");
        assert_eq!(task.priority, Priority::Normal);
        assert!(!task.done);
    }
}
