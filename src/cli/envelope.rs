//! Envelope CLI command
//!
//! Implements the envelope punch-position calculation command.

use clap::Args;

use crate::config::Settings;
use crate::display::format_envelope_summary;
use crate::error::PunchBoardResult;
use crate::services;

/// Arguments for the envelope command
#[derive(Args, Debug)]
pub struct EnvelopeArgs {
    /// Length of the envelope content
    #[arg(short = 'l', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub length: f64,

    /// Width of the envelope content
    #[arg(short = 'w', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub width: f64,

    /// Loose envelope (extra margin allowance)
    #[arg(long)]
    pub loose: bool,

    /// Mini punch board
    #[arg(long)]
    pub mini: bool,

    /// Also show measurements as mixed-number fractions
    #[arg(long, env = "PBC_FRACTION")]
    pub fraction: bool,
}

/// Handle the envelope command
pub fn handle_envelope_command(settings: &Settings, args: EnvelopeArgs) -> PunchBoardResult<()> {
    let layout = services::envelope::calculate(args.length, args.width, args.loose, args.mini);

    let fractions = args.fraction || settings.display.fractions;
    print!(
        "{}",
        format_envelope_summary(args.length, args.width, &layout, fractions)
    );

    Ok(())
}
