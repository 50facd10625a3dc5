//! Configuration module for the punch-board calculator
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PunchBoardPaths;
pub use settings::Settings;
