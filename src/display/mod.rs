//! Display formatting for terminal output
//!
//! Provides utilities for formatting computed results for terminal display.

pub mod envelope;

pub use envelope::format_envelope_summary;
