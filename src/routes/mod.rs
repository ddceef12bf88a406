pub mod activities;

use crate::handlers;
use crate::models::{Activity, MessageResponse};
use crate::server::AppState;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::activities::list_activities,
        handlers::activities::signup_for_activity,
        handlers::activities::unregister_participant
    ),
    components(schemas(Activity, MessageResponse))
)]
struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .merge(activities::routes())
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// The interactive API docs stand in for a front-end at the root path
async fn root_redirect() -> Redirect {
    Redirect::permanent("/swagger-ui")
}
