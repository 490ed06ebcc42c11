use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// tgcal inline date picker driver.
#[derive(Parser)]
#[command(
    name = "tgcal",
    version,
    about = "Render and drive an inline chat-bot date picker"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the first page of a picker.
    Build(BuildArgs),
    /// Apply a tapped callback token and print the result.
    Process(ProcessArgs),
    /// Decode a callback token and print its fields.
    Inspect(InspectArgs),
}

/// Picker settings shared by `build` and `process`.
#[derive(clap::Args)]
pub struct PickerArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the picker id from config.
    #[arg(long = "calendar-id")]
    pub calendar_id: Option<u32>,

    /// Override the calendar system (gregorian, jalali).
    #[arg(long)]
    pub system: Option<String>,

    /// Override the label language (en, ru, fa).
    #[arg(long)]
    pub locale: Option<String>,

    /// Override the initial date, YYYY-MM-DD in the picker's calendar system.
    #[arg(long)]
    pub today: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Output format of rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned button grid.
    Text,
    /// JSON document.
    Json,
}

/// Page granularity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    Year,
    Month,
    Day,
}

/// Arguments for the `build` subcommand.
#[derive(clap::Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Step of the first page.
    #[arg(short, long, value_enum)]
    pub step: Option<StepArg>,
}

/// Arguments for the `process` subcommand.
#[derive(clap::Args)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Callback token of the tapped button.
    pub token: String,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Callback token to decode.
    pub token: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}
