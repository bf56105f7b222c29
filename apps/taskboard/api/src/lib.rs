//! Taskboard HTTP service.
//!
//! Wires the in-memory task store into the task domain router and wraps it
//! with the shared server pieces from `axum-helpers`.

pub mod config;
pub mod openapi;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use domain_tasks::handlers::{self, RESOURCE_PATH};
use domain_tasks::{InMemoryTaskRepository, TaskService};

/// Domain routes with their state applied.
pub fn routes(repository: InMemoryTaskRepository) -> Router {
    let service = TaskService::new(repository);

    Router::new().nest(RESOURCE_PATH, handlers::router(service))
}

/// The complete application: task routes, OpenAPI document, health check and fallback.
pub fn app(app_info: AppInfo, repository: InMemoryTaskRepository) -> Router {
    create_router::<openapi::ApiDoc>(routes(repository)).merge(health_router(app_info))
}
