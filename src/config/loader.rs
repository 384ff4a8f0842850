//! Policy configuration loading.
//!
//! Loads a [`PolicyConfig`] from a single YAML file and validates it before
//! handing it to the pipeline.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

impl PolicyConfig {
    /// Loads and validates a policy from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file cannot be read
    /// - [`EngineError::ConfigParseError`] on invalid YAML
    /// - [`EngineError::InvalidPolicy`] when validation fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::PolicyConfig;
    ///
    /// let policy = PolicyConfig::load("./config/policy.yaml")?;
    /// println!("Baseline: {} hours", policy.baseline_hours);
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy: PolicyConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        policy.validate()?;
        Ok(policy)
    }
}
