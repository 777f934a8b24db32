use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

/// Sort key for the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Deadline,
    Name,
    Status,
}

impl SortBy {
    /// Parse the bare value stored under the sort preference key
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim() {
            "deadline" => Some(Self::Deadline),
            "name" => Some(Self::Name),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Deadline => "deadline",
            Self::Name => "name",
            Self::Status => "status",
        }
    }

    /// Next key in the deadline -> name -> status cycle
    pub fn next(self) -> Self {
        match self {
            Self::Deadline => Self::Name,
            Self::Name => Self::Status,
            Self::Status => Self::Deadline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Deadline => "Deadline",
            Self::Name => "Name",
            Self::Status => "Status",
        }
    }

    pub fn all() -> &'static [SortBy] {
        &[SortBy::Deadline, SortBy::Name, SortBy::Status]
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Completion filter applied after search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Done,
    Pending,
}

impl Filter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Done => "Done",
            Self::Pending => "Pending",
        }
    }

    /// Whether a task with the given completion flag passes this filter
    pub fn accepts(&self, done: bool) -> bool {
        match self {
            Self::All => true,
            Self::Done => done,
            Self::Pending => !done,
        }
    }

    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Done, Filter::Pending]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Searching,
    EditingTask, // Add/edit dialog is open
    Settings,
    Confirming,
}

/// Field of the add/edit dialog that has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Course,
    Deadline,
    Priority,
    Notes,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Course,
        FormField::Deadline,
        FormField::Priority,
        FormField::Notes,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Course => "Course",
            Self::Deadline => "Deadline (YYYY-MM-DD)",
            Self::Priority => "Priority",
            Self::Notes => "Notes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_cycle() {
        assert_eq!(SortBy::Deadline.next(), SortBy::Name);
        assert_eq!(SortBy::Name.next(), SortBy::Status);
        assert_eq!(SortBy::Status.next(), SortBy::Deadline);
    }

    #[test]
    fn test_sort_by_keys() {
        for sort in SortBy::all() {
            assert_eq!(SortBy::from_key(sort.as_key()), Some(*sort));
        }
        assert_eq!(SortBy::from_key("priority"), None);
    }

    #[test]
    fn test_theme_keys() {
        assert_eq!(Theme::from_key("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_key("light"), Some(Theme::Light));
        assert_eq!(Theme::from_key("solarized"), None);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_filter_accepts() {
        assert!(Filter::All.accepts(true));
        assert!(Filter::All.accepts(false));
        assert!(Filter::Done.accepts(true));
        assert!(!Filter::Done.accepts(false));
        assert!(Filter::Pending.accepts(false));
        assert!(!Filter::Pending.accepts(true));
    }

    #[test]
    fn test_form_field_cycle() {
        assert_eq!(FormField::Name.next(), FormField::Course);
        assert_eq!(FormField::Notes.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Notes);
        assert_eq!(FormField::Priority.prev(), FormField::Deadline);
    }

    #[test]
    fn test_priority_serde() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(p, Priority::Normal);
    }
}
