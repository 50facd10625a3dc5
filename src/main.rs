use anyhow::Result;
use clap::{Parser, Subcommand};

use punchboard::cli::{
    handle_envelope_command, handle_fraction_command, EnvelopeArgs, FractionArgs,
};
use punchboard::config::{paths::PunchBoardPaths, settings::Settings};
use punchboard::logging;

#[derive(Parser)]
#[command(
    name = "pbc",
    version,
    about = "Calculate envelope punch positions when using a 1-2-3 punch board",
    long_about = "pbc (punch-board-calculator) computes the paper size to cut and the \
                  punch-pin location for envelopes folded on a fixed punch board, \
                  given the content's length and width."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate punch positions for an envelope
    Envelope(EnvelopeArgs),

    /// Convert a decimal value to a mixed-number fraction
    Fraction(FractionArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PunchBoardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    logging::init(&settings.logging.level);
    tracing::debug!(
        config_dir = %paths.config_dir().display(),
        level = %settings.logging.level,
        "loaded configuration"
    );

    match cli.command {
        Some(Commands::Envelope(args)) => {
            handle_envelope_command(&settings, args)?;
        }
        Some(Commands::Fraction(args)) => {
            handle_fraction_command(args)?;
        }
        Some(Commands::Config) => {
            println!("Punch Board Calculator Configuration");
            println!("====================================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Logging level:  {}", settings.logging.level);
            println!("  Show fractions: {}", settings.display.fractions);
        }
        None => {
            println!("pbc - envelope punch position calculator");
            println!();
            println!("Run 'pbc --help' for usage information.");
            println!("Run 'pbc envelope -l <length> -w <width>' to calculate punch positions.");
        }
    }

    Ok(())
}
