use std::{collections::HashMap, sync::Arc};

use dashmap::DashMap;
use thiserror::Error;

use crate::models::Activity;

pub type ActivityName = String;

/// Why a signup request was rejected. Every variant is a client error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

/// Why an unregister request was rejected. Every variant means the target is absent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnregisterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,
}

/// In-memory store of all activities, keyed by activity name
#[derive(Clone, Default)]
pub struct ActivityRegistry {
    activities: Arc<DashMap<ActivityName, Activity>>,
}

impl ActivityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the sample activities
    pub fn with_samples() -> Self {
        let registry = Self::new();

        registry.insert(
            "Chess Club",
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        );
        registry.insert(
            "Programming Class",
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        );
        registry.insert(
            "Gym Class",
            Activity {
                description: "Physical education and sports activities".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: vec![
                    "john@mergington.edu".to_string(),
                    "olivia@mergington.edu".to_string(),
                ],
            },
        );

        registry
    }

    /// Add or replace an activity
    pub fn insert(&self, name: impl Into<ActivityName>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    /// Snapshot of every activity keyed by name
    pub fn list(&self) -> HashMap<ActivityName, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Get a single activity by name
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    /// Append `email` to the activity's participant list.
    ///
    /// The duplicate and capacity checks and the append happen under a single
    /// entry guard, so concurrent signups cannot overshoot `max_participants`.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;
        let activity = entry.value_mut();

        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if activity.participants.len() >= activity.max_participants {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove one occurrence of `email` from the activity's participant list
    pub fn unregister(&self, name: &str, email: &str) -> Result<(), UnregisterError> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or(UnregisterError::ActivityNotFound)?;
        let activity = entry.value_mut();

        let index = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(UnregisterError::ParticipantNotFound)?;
        activity.participants.remove(index);
        Ok(())
    }
}
