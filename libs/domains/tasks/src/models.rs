use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task not started
    #[default]
    Pending,
    /// Task in progress
    InProgress,
    /// Task completed
    Done,
}

/// Task entity - the canonical state held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned on creation
    pub id: String,
    /// Task title
    pub title: String,
    /// Optional free-form description, `null` on the wire when absent
    #[serde(default)]
    pub description: Option<String>,
    /// Task status
    pub status: TaskStatus,
    /// Due date (`yyyy-MM-dd` on the wire)
    pub due_date: NaiveDate,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `PENDING` when omitted
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
}

/// DTO for updating an existing task
///
/// Every field is optional; `None` leaves the stored value untouched.
/// A provided title is taken as-is, blank included.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
}

/// Query filters for listing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskFilter {
    /// Only return tasks with this status
    pub status: Option<TaskStatus>,
    /// Zero-based page index
    #[serde(default)]
    pub page: i32,
    /// Page length; zero or negative disables pagination
    #[serde(default = "default_size")]
    pub size: i32,
}

fn default_size() -> i32 {
    10
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            page: 0,
            size: default_size(),
        }
    }
}

impl TaskFilter {
    pub fn new(status: Option<TaskStatus>, page: i32, size: i32) -> Self {
        Self { status, page, size }
    }

    /// Whether `task` passes the status filter
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status == status)
    }

    /// Slice bounds for this page over `len` sorted items, or `None` for the full range
    pub fn bounds(&self, len: usize) -> Option<std::ops::Range<usize>> {
        if self.size <= 0 {
            return None;
        }

        let size = self.size as usize;
        let from = (self.page.max(0) as usize).saturating_mul(size);
        if from >= len {
            return Some(len..len);
        }

        Some(from..len.min(from.saturating_add(size)))
    }
}

impl Task {
    /// Merge the provided fields of an update into this task
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
