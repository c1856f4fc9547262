pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "widget-kit")]
#[command(about = "Validate phone numbers and build immutable widgets")]
pub struct CliConfig {
    /// Path to TOML configuration file with phone numbers and widgets
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate phone numbers (keeps only digits, requires exactly 10)
    Phone {
        #[arg(allow_hyphen_values = true)]
        numbers: Vec<String>,
    },
    /// Build the configured widgets
    Widgets,
    /// Run both demonstrations
    Demo,
}
