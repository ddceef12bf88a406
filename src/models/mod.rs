pub mod activities;

// Re-export all models for easier imports
pub use activities::*;
