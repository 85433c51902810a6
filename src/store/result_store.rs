use indexmap::IndexMap;

use crate::store::store_model::{ExecutionTarget, Outcome, SuiteNode, TargetRecord, TestCompletion};

// ============================================================================
// ResultStore — per-run aggregation of completion events
// ============================================================================

/// Mutable, append-only-per-target aggregation of test outcomes.
///
/// Owned by the caller and constructed per run; there is no process-wide
/// state. Targets iterate in first-seen order. All operations are
/// infallible for well-formed input: an unknown target id creates a
/// zero-valued record rather than signaling an error.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    targets: IndexMap<String, TargetRecord>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all accumulated records.
    ///
    /// The host calls this exactly once at a run boundary; calling it
    /// mid-run abandons the run in progress.
    pub fn reset(&mut self) {
        self.targets.clear();
    }

    /// Record one completed test for `target`.
    ///
    /// Creates the target record and any missing suite nodes along the
    /// completion's suite path, then stores the outcome at the final node
    /// (last write wins for a repeated description) and bumps the
    /// category and total counters.
    pub fn record_completion(&mut self, target: &ExecutionTarget, completion: &TestCompletion) {
        let record = self
            .targets
            .entry(target.id.clone())
            .or_insert_with(|| TargetRecord::new(&target.name));

        let mut node = &mut record.root;
        for segment in &completion.suite_path {
            node = node.children.entry(segment.clone()).or_default();
        }

        let outcome = Outcome::from_flags(completion.success, completion.skipped);
        node.results.insert(completion.description.clone(), outcome);

        record.total_count += 1;
        match outcome {
            Outcome::Success => record.success_count += 1,
            Outcome::Failure => record.failure_count += 1,
            Outcome::Skipped => record.skipped_count += 1,
        }
    }

    pub fn get(&self, target_id: &str) -> Option<&TargetRecord> {
        self.targets.get(target_id)
    }

    /// Iterate `(id, record)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TargetRecord)> {
        self.targets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}
