//! Tasks Domain
//!
//! In-memory task tracking: a concurrent store, a service enforcing due-date
//! and partial-update rules, and the HTTP handlers in front of them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Id assignment, due-date validation, merge
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Concurrent in-memory store
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{handlers, InMemoryTaskRepository, TaskService};
//!
//! let repository = InMemoryTaskRepository::new();
//! let service = TaskService::new(repository);
//!
//! let router = axum::Router::new().nest(handlers::RESOURCE_PATH, handlers::router(service));
//! # let _: axum::Router = router;
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{CreateTask, Task, TaskFilter, TaskStatus, UpdateTask};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
