//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for derma-service
#[derive(Parser, Debug)]
#[command(name = "derma-service")]
#[command(author, version, about = "Skin-lesion classification HTTP service")]
#[command(long_about = r#"
derma-service classifies uploaded skin-lesion images into disease categories
using a pre-trained model, and keeps a small catalog of diseases, usage
statistics and user ratings in memory.

Configuration is loaded from (in priority order):
1. DERMA_* environment variables (e.g. DERMA_SERVER__PORT=9000)
2. --config <path>     Explicit config file
3. ./derma.toml        Project-level config
4. ~/.config/derma/config.toml   Global config

Command-line flags override all of the above.

Example:
  derma-service --model ./model.json --port 8000
  curl -F file=@lesion.jpg http://localhost:8000/predict
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Interface to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to the classifier artifact
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
