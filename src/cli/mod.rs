//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod envelope;
pub mod fraction;

pub use envelope::{handle_envelope_command, EnvelopeArgs};
pub use fraction::{handle_fraction_command, FractionArgs};
