//! Service layer for the punch-board calculator
//!
//! The service layer holds the geometry behind the CLI commands. All
//! services here are pure functions over their arguments.

pub mod envelope;
