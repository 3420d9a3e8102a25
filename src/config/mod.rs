//! Configuration module for Monthwise
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MonthwisePaths;
pub use settings::{Settings, DEFAULT_DATE_FORMAT};
