use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::report::console::{ColorMode, ReporterConfig, VerboseOutput};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "browser-summary",
    version,
    about = "Multi-browser test result summary reporter"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: browser-summary.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a recorded test event log as a per-browser summary
    Render {
        /// Path to a JSONL event log, or "-" for stdin
        #[arg(long, default_value = "-")]
        log: String,

        /// Detail mode: all or only-failure
        #[arg(long)]
        output_mode: Option<String>,

        /// Color composition: full or plain
        #[arg(long)]
        color_mode: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `browser-summary.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_all")]
    pub output_mode: String,

    #[serde(default = "default_plain")]
    pub color_mode: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_mode: "all".to_string(),
            color_mode: "plain".to_string(),
        }
    }
}

// Serde default helpers
fn default_all() -> String { "all".to_string() }
fn default_plain() -> String { "plain".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("browser-summary.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build a ReporterConfig from resolved CLI/config mode names.
pub fn build_reporter_config(output_mode: &str, color_mode: &str) -> ReporterConfig {
    ReporterConfig {
        verbose_output: VerboseOutput::from_name(output_mode),
        color: ColorMode::from_name(color_mode),
    }
}
