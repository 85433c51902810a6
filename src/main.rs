use browser_summary::cli::commands::cmd_render;
use browser_summary::cli::config::{Cli, Commands, load_config};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render {
            log,
            output_mode,
            color_mode,
            output,
        } => {
            // Resolve modes: CLI > config file > defaults
            let output_mode = output_mode.as_deref().unwrap_or(&config.render.output_mode);
            let color_mode = color_mode.as_deref().unwrap_or(&config.render.color_mode);

            let all_passed = cmd_render(&log, output_mode, color_mode, output.as_deref(), cli.verbose)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
