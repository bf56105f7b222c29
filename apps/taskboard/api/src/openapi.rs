use domain_tasks::handlers::RESOURCE_PATH;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "Create, update, list and delete tasks with due dates"
    ),
    nest(
        (path = RESOURCE_PATH, api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
