use dashmap::DashMap;
use std::sync::Arc;

use crate::models::{Task, TaskFilter};

/// Repository trait for Task storage
///
/// Operations are total: a miss is `None` and deleting an absent id is a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Insert the task, replacing any existing task with the same id
    fn save(&self, task: Task) -> Task;

    /// Get a task by ID
    fn find_by_id(&self, id: &str) -> Option<Task>;

    /// Delete a task by ID
    fn delete_by_id(&self, id: &str);

    /// Filter by status, sort by due date (then id), and paginate
    fn query(&self, filter: TaskFilter) -> Vec<Task>;
}

/// In-memory implementation of TaskRepository
///
/// Backed by a sharded concurrent map, so writers to different ids do not
/// contend on a single lock. Clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<DashMap<String, Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(DashMap::new()),
        }
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove every task. Intended for resetting state between tests.
    pub fn clear(&self) {
        self.tasks.clear();
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn save(&self, task: Task) -> Task {
        self.tasks.insert(task.id.clone(), task.clone());
        tracing::debug!(task_id = %task.id, "Saved task");
        task
    }

    fn find_by_id(&self, id: &str) -> Option<Task> {
        self.tasks.get(id).map(|entry| entry.value().clone())
    }

    fn delete_by_id(&self, id: &str) {
        if self.tasks.remove(id).is_some() {
            tracing::debug!(task_id = %id, "Deleted task");
        }
    }

    fn query(&self, filter: TaskFilter) -> Vec<Task> {
        let mut result: Vec<Task> = self
            .tasks
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        // Earliest due date first; id keeps pages stable across calls
        result.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));

        match filter.bounds(result.len()) {
            Some(range) => result.drain(range).collect(),
            None => result,
        }
    }
}
