//! Application state for the Attendance Performance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyConfig;

/// Shared application state.
///
/// Contains resources shared across all request handlers, currently the
/// loaded scoring policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scoring policy.
    policy: Arc<PolicyConfig>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the scoring policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_policy() {
        let state = AppState::new(PolicyConfig::default());
        assert_eq!(state.policy(), &PolicyConfig::default());
    }
}
