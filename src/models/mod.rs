//! Core data models for the punch-board calculator
//!
//! This module contains the value types of the domain: computed envelope
//! layouts and exact mixed-number values.

pub mod envelope;
pub mod rational;

pub use envelope::EnvelopeLayout;
pub use rational::{Rational, RationalParseError};
