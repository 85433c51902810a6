use serde::{Deserialize, Serialize};

use crate::store::store_model::{ExecutionTarget, TestCompletion};

// ============================================================================
// Wire model for recorded test-completion events
// ============================================================================

/// One test-completion event as recorded by a host runner, one JSON object
/// per line in an event log.
///
/// `suite` may be omitted for tests attached directly to the target's root;
/// omitted `success`/`skipped` flags default to false, which records a
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionEvent {
    /// The browser that ran the test
    pub target: ExecutionTarget,

    /// Nested suite names leading to the test
    #[serde(default)]
    pub suite: Vec<String>,

    /// Test description
    pub description: String,

    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub skipped: bool,
}

impl CompletionEvent {
    /// The per-test payload the store aggregates.
    pub fn completion(&self) -> TestCompletion {
        TestCompletion {
            suite_path: self.suite.clone(),
            description: self.description.clone(),
            success: self.success,
            skipped: self.skipped,
        }
    }
}
