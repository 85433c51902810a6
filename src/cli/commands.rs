use crate::cli::config::build_reporter_config;
use crate::event::log_reader::{read_events, replay};
use crate::report::reporter::SummaryReporter;
use crate::report::sink::SharedSink;
use crate::report::style::{AnsiStyler, PlainStyler, Styler};

// ============================================================================
// render subcommand
// ============================================================================

/// Replay a recorded event log and return whether no test failed.
///
/// File output gets the plain styler so reports on disk stay free of ANSI
/// escapes; stdout gets full ANSI styling.
pub fn cmd_render(
    log: &str,
    output_mode: &str,
    color_mode: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let events = if log == "-" {
        read_events(std::io::stdin().lock())?
    } else {
        read_events(std::fs::File::open(log)?)?
    };

    if verbose > 0 {
        eprintln!("Replaying {} test events from {}...", events.len(), log);
    }

    let config = build_reporter_config(output_mode, color_mode);
    let styler: Box<dyn Styler> = if output.is_some() {
        Box::new(PlainStyler)
    } else {
        Box::new(AnsiStyler)
    };

    let sink = SharedSink::new();
    let mut reporter = SummaryReporter::new(config, styler, Box::new(sink.clone()));
    replay(&events, &mut reporter);

    let all_passed = !reporter.had_failures();
    let output_content = sink.contents();

    // Write or print
    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}
