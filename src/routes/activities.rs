use crate::handlers::{list_activities, signup_for_activity, unregister_participant};
use crate::server::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Create the activity routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/participants",
            delete(unregister_participant),
        )
}
