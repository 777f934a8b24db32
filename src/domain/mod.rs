pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Filter, FormField, Priority, SortBy, Theme, UiMode};
pub use task::{generate_id, Task};
pub use views::{count_summary, deadline_label, derive_view, TaskView};
