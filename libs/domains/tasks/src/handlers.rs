use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestValidationResponse, NotFoundResponse},
    AppError, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, TaskFilter, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// Path the task router is mounted under; also used for `Location` headers
pub const RESOURCE_PATH: &str = "/tasks";

const TAG: &str = "tasks";

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(Task, CreateTask, UpdateTask, TaskStatus),
        responses(NotFoundResponse, BadRequestValidationResponse)
    ),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the task router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(shared_service)
}

/// List tasks, earliest due date first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(TaskFilter),
    responses(
        (status = 200, description = "Page of tasks", body = Vec<Task>),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    filter: Result<Query<TaskFilter>, QueryRejection>,
) -> Result<Json<Vec<Task>>, AppError> {
    let Query(filter) = filter?;
    Ok(Json(service.list_tasks(filter)))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input)?;
    let location = format!("{}/{}", RESOURCE_PATH, task.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    Ok(Json(service.get_task(&id)?))
}

/// Update the provided fields of a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
    input: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<Task>, AppError> {
    let Json(input) = input?;
    Ok(Json(service.update_task(&id, input)?))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<StatusCode> {
    service.delete_task(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
