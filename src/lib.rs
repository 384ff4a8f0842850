//! Attendance Performance Engine
//!
//! This crate reconciles raw time-clock, holiday, and permission records into
//! a clean monthly dataset of work hours, overtime, delay, and tiered
//! fines/bonuses suitable for reporting.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;
