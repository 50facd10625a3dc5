//! Envelope display formatting
//!
//! Formats computed envelope layouts for terminal output.

use crate::models::{EnvelopeLayout, Rational};

/// Format an envelope calculation as the lines the CLI prints
///
/// Echoes the content dimensions at two decimal places, then the computed
/// measurements at one. With `fractions` set, each measurement also carries
/// the mixed-number form of its one-decimal rendering.
pub fn format_envelope_summary(
    length: f64,
    width: f64,
    layout: &EnvelopeLayout,
    fractions: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Content (length x width): {:.2} x {:.2}\n",
        length, width
    ));
    output.push_str(&format!(
        "Paper size: {}\n",
        format_measurement(layout.paper_size, fractions)
    ));
    output.push_str(&format!(
        "Punch location: {}\n",
        format_measurement(layout.punch_location, fractions)
    ));

    output
}

/// Format a single measurement at one decimal place, optionally with its
/// mixed-number form
fn format_measurement(value: f64, fractions: bool) -> String {
    let decimal = format!("{:.1}", value);

    if !fractions {
        return decimal;
    }

    match Rational::parse_decimal(&decimal) {
        Ok(rational) => format!("{} ({})", decimal, rational),
        Err(_) => decimal,
    }
}
