use crate::report::console::{ConsoleRenderer, ReporterConfig};
use crate::report::sink::OutputSink;
use crate::report::style::Styler;
use crate::store::result_store::ResultStore;
use crate::store::store_model::{ExecutionTarget, TestCompletion};

// ============================================================================
// SummaryReporter — the host-facing event contract
// ============================================================================

/// Receives the host runner's event stream and writes the final summary.
///
/// The host delivers `run_started`, then a strictly sequential stream of
/// `test_completed` calls (interleaved across targets but never
/// re-entrant), then `run_completed`. The store starts empty at
/// construction, so a completion arriving before `run_started` is simply
/// aggregated into an empty run.
pub struct SummaryReporter {
    config: ReporterConfig,
    store: ResultStore,
    styler: Box<dyn Styler>,
    sink: Box<dyn OutputSink>,
}

impl SummaryReporter {
    pub fn new(config: ReporterConfig, styler: Box<dyn Styler>, sink: Box<dyn OutputSink>) -> Self {
        Self {
            config,
            store: ResultStore::new(),
            styler,
            sink,
        }
    }

    /// Marks a run boundary; discards anything previously accumulated.
    pub fn run_started(&mut self) {
        self.store.reset();
    }

    /// Aggregates one completed test into the store.
    pub fn test_completed(&mut self, target: &ExecutionTarget, completion: &TestCompletion) {
        self.store.record_completion(target, completion);
    }

    /// Renders the accumulated results and writes them to the sink once.
    pub fn run_completed(&mut self) {
        let renderer = ConsoleRenderer::new(self.config, self.styler.as_ref());
        let text = renderer.render_run(&self.store);
        self.sink.write(&text);
    }

    /// Whether any target recorded at least one failure.
    pub fn had_failures(&self) -> bool {
        self.store.iter().any(|(_, record)| record.failure_count > 0)
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}
