use crate::models::Activity;
use crate::registry::ActivityRegistry;
use crate::server::AppState;

/// Create a test AppState with the sample activities for testing
pub fn create_test_state() -> AppState {
    AppState {
        registry: ActivityRegistry::with_samples(),
    }
}

/// Seed an extra activity into the given state's registry for testing
pub fn seed_activity(
    state: &AppState,
    name: &str,
    capacity: usize,
    participants: Vec<String>,
) {
    state.registry.insert(
        name,
        Activity {
            description: "Test activity".to_string(),
            schedule: "On demand".to_string(),
            max_participants: capacity,
            participants,
        },
    );
}
