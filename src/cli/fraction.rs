//! Fraction CLI command
//!
//! Converts a decimal value to its mixed-number form.

use clap::Args;

use crate::error::{PunchBoardError, PunchBoardResult};
use crate::models::Rational;

/// Arguments for the fraction command
#[derive(Args, Debug)]
pub struct FractionArgs {
    /// Decimal value to convert (e.g. "1.25" or "-.2")
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Handle the fraction command
pub fn handle_fraction_command(args: FractionArgs) -> PunchBoardResult<()> {
    let rational = Rational::parse_decimal(&args.value).map_err(|e| {
        PunchBoardError::Validation(format!(
            "Invalid decimal value: '{}'. Use a format like '1.25' or '-.2'. Error: {}",
            args.value, e
        ))
    })?;

    println!("{} = {}", args.value, rational);

    Ok(())
}
