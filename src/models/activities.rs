use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A single extracurricular activity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    /// Human-readable description of the activity
    pub description: String,

    /// Meeting schedule
    pub schedule: String,

    /// Maximum number of participants
    pub max_participants: usize,

    /// Enrolled participant emails, in signup order
    pub participants: Vec<String>,
}

/// Confirmation message returned by the mutating endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters for signup and unregister requests
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Participant email address
    pub email: String,
}
