use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult, DUE_DATE_NOT_IN_FUTURE, DUE_DATE_REQUIRED};
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Owns id assignment, due-date validation and partial-update merging.
/// All state lives in the repository; nothing is cached between calls.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository, C: Clock + Send + Sync = DefaultClock> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, DefaultClock)
    }
}

impl<R: TaskRepository, C: Clock + Send + Sync> TaskService<R, C> {
    /// Build a service that reads "today" from the given clock
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self {
            repository: Arc::new(repository),
            clock: Arc::new(clock),
        }
    }

    /// Create a new task with a generated id
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        let due_date = self.validate_due_date(input.due_date)?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or_default(),
            due_date,
        };

        let task = self.repository.save(task);
        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub fn get_task(&self, id: &str) -> TaskResult<Task> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Merge the provided fields into an existing task
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub fn update_task(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        let mut task = self.get_task(id)?;

        if input.due_date.is_some() {
            self.validate_due_date(input.due_date)?;
        }

        task.apply_update(input);

        let task = self.repository.save(task);
        tracing::info!(task_id = %id, "Updated task");
        Ok(task)
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub fn delete_task(&self, id: &str) -> TaskResult<()> {
        let task = self.get_task(id)?;
        self.repository.delete_by_id(&task.id);

        tracing::info!(task_id = %id, "Deleted task");
        Ok(())
    }

    /// List tasks with filters
    pub fn list_tasks(&self, filter: TaskFilter) -> Vec<Task> {
        self.repository.query(filter)
    }

    fn validate_due_date(&self, due_date: Option<NaiveDate>) -> TaskResult<NaiveDate> {
        let due_date = due_date.ok_or_else(|| TaskError::Validation(DUE_DATE_REQUIRED.to_string()))?;

        let today = self.clock.local().date_naive();
        if due_date <= today {
            return Err(TaskError::Validation(DUE_DATE_NOT_IN_FUTURE.to_string()));
        }

        Ok(due_date)
    }
}
