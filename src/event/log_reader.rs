use std::io::{BufRead, BufReader, Read};

use crate::event::event_model::CompletionEvent;
use crate::report::reporter::SummaryReporter;

// ============================================================================
// JSONL event-log reading and replay
// ============================================================================

/// Parse a JSONL event log: one JSON event per line, blank lines skipped.
///
/// A malformed line fails the whole read, with the 1-based line number in
/// the error message.
pub fn read_events<R: Read>(reader: R) -> Result<Vec<CompletionEvent>, Box<dyn std::error::Error>> {
    let mut events = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let event: CompletionEvent = serde_json::from_str(trimmed)
            .map_err(|e| format!("event log line {}: {}", index + 1, e))?;
        events.push(event);
    }

    Ok(events)
}

/// Drive a reporter through one full run of recorded events.
pub fn replay(events: &[CompletionEvent], reporter: &mut SummaryReporter) {
    reporter.run_started();
    for event in events {
        reporter.test_completed(&event.target, &event.completion());
    }
    reporter.run_completed();
}
