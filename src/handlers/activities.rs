use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{Activity, EmailQuery, MessageResponse};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};

/// List activities
///
/// Returns every activity keyed by name, including its current participants.
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activities listed successfully", body = HashMap<String, Activity>)
    )
)]
#[axum::debug_handler]
pub async fn list_activities(State(state): State<AppState>) -> Json<HashMap<String, Activity>> {
    Json(state.registry.list())
}

/// Sign up for an activity
///
/// Appends the participant email to the activity's signup list.
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    responses(
        (status = 200, description = "Signed up successfully", body = MessageResponse),
        (status = 400, description = "Unknown activity, duplicate signup, or activity full")
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        EmailQuery
    )
)]
#[axum::debug_handler]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    state.registry.signup(&activity_name, &query.email)?;
    tracing::info!("Signed up {} for {}", query.email, activity_name);

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Unregister from an activity
///
/// Removes the participant email from the activity's signup list.
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/participants",
    responses(
        (status = 200, description = "Unregistered successfully", body = MessageResponse),
        (status = 404, description = "Activity or participant not found")
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        EmailQuery
    )
)]
#[axum::debug_handler]
pub async fn unregister_participant(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    state.registry.unregister(&activity_name, &query.email)?;
    tracing::info!("Unregistered {} from {}", query.email, activity_name);

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
