//! Configuration module for Splitify
//!
//! This module provides configuration management including:
//! - Path resolution for settings, database and log file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SplitifyPaths;
pub use settings::{Settings, Theme};
