// Export modules for testing
pub mod about;
pub mod app;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod error;
pub mod state;
pub mod ui;

// Re-export main struct and types for testing
pub use crate::config::ConfigData;
pub use crate::conversion::{ConversionRule, CONVERSIONS};
pub use crate::error::ConversionError;
pub use crate::state::{ConverterSession, State};

// Constants
pub const PROGRAM_TITLE: &str = "Length Converter";
pub const INITIAL_WIDTH: f32 = 420.0;
pub const INITIAL_HEIGHT: f32 = 260.0;

// Args struct for command line parsing
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Convert this kilometer value and print the result instead of opening the window
    #[arg(short, long, allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Only use this rule (position 1-6, label or unit name) with --value
    #[arg(short, long, requires = "value")]
    pub rule: Option<String>,

    /// Print the available conversions and exit
    #[arg(short, long, default_value_t = false)]
    pub list_rules: bool,

    /// Start with an empty session instead of the one saved on last exit
    #[arg(long, default_value_t = false)]
    pub no_restore: bool,
}

// Re-exported so callers can build a LengthConverter around their own config file
pub use fast_config::Config;

// The main application struct
pub struct LengthConverter {
    // State
    pub state: State,
    pub session: ConverterSession,

    // Configuration, None if the config file could not be created
    pub config: Option<Config<ConfigData>>,
    pub restore: bool, // Restore the saved session during init
}
