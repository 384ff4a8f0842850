//! Policy configuration for the Attendance Performance Engine.
//!
//! The daily baseline and the fine/bonus tier tables are named configuration
//! rather than embedded literals, so per-organization policy variation needs
//! no code change.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::PolicyConfig;
//!
//! let policy = PolicyConfig::load("./config/policy.yaml").unwrap();
//! println!("Baseline: {} hours", policy.baseline_hours);
//! ```

mod loader;
mod types;

pub use types::PolicyConfig;
