use clap::Parser;
use browser_summary::cli::config::{
    AppConfig, Cli, Commands, build_reporter_config, load_config,
};
use browser_summary::report::console::{ColorMode, VerboseOutput};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_render_minimal() {
    let cli = Cli::parse_from(["browser-summary", "render"]);
    match cli.command {
        Commands::Render {
            log,
            output_mode,
            color_mode,
            output,
        } => {
            assert_eq!(log, "-");
            assert!(output_mode.is_none());
            assert!(color_mode.is_none());
            assert!(output.is_none());
        }
    }
    assert_eq!(cli.verbose, 0);
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_render_all_args() {
    let cli = Cli::parse_from([
        "browser-summary",
        "render",
        "--log",
        "run.jsonl",
        "--output-mode",
        "only-failure",
        "--color-mode",
        "full",
        "-o",
        "summary.txt",
    ]);
    match cli.command {
        Commands::Render {
            log,
            output_mode,
            color_mode,
            output,
        } => {
            assert_eq!(log, "run.jsonl");
            assert_eq!(output_mode.as_deref(), Some("only-failure"));
            assert_eq!(color_mode.as_deref(), Some("full"));
            assert_eq!(output.as_deref(), Some("summary.txt"));
        }
    }
}

#[test]
fn cli_parse_global_flags() {
    let cli = Cli::parse_from([
        "browser-summary",
        "render",
        "-vv",
        "--config",
        "custom.yaml",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn load_config_missing_file_defaults() {
    let config = load_config(Some("/nonexistent/browser-summary.yaml"));
    assert_eq!(config.render.output_mode, "all");
    assert_eq!(config.render.color_mode, "plain");
}

#[test]
fn load_config_from_yaml_file() {
    let path = std::env::temp_dir().join("browser-summary-config-test.yaml");
    std::fs::write(&path, "render:\n  output_mode: only-failure\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.render.output_mode, "only-failure");
    // Unset fields fall back to their defaults
    assert_eq!(config.render.color_mode, "plain");

    std::fs::remove_file(&path).ok();
}

#[test]
fn config_yaml_defaults_when_section_missing() {
    let config: AppConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.render.output_mode, "all");
    assert_eq!(config.render.color_mode, "plain");
}

// ============================================================================
// Mode Resolution Tests
// ============================================================================

#[test]
fn build_reporter_config_known_modes() {
    let config = build_reporter_config("only-failure", "full");
    assert_eq!(config.verbose_output, VerboseOutput::OnlyFailure);
    assert_eq!(config.color, ColorMode::Full);
}

#[test]
fn build_reporter_config_unknown_modes_fall_back() {
    // Anything other than the recognized names means "all" and "plain"
    let config = build_reporter_config("everything", "rainbow");
    assert_eq!(config.verbose_output, VerboseOutput::All);
    assert_eq!(config.color, ColorMode::Plain);
}
