pub mod settings;

use clap::Parser;

pub use settings::Settings;

#[derive(Debug, Clone, Parser)]
#[command(name = "sheet-roster")]
#[command(about = "HTTP backend for a spreadsheet-backed signup roster")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Settings file; when omitted, settings come from the environment.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
