use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Target identity and test outcome
// ============================================================================

/// One browser/environment instance running the test suite.
///
/// Supplied by the host runner with every completion event; the store looks
/// records up by `id` and fixes the display `name` at first observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionTarget {
    /// Stable identity, unique within a run
    pub id: String,

    /// Human-readable name, e.g. "Chrome 120"
    pub name: String,
}

/// Recorded result of one test execution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
    Skipped,
}

impl Outcome {
    /// Derive an outcome from the host runner's result flags.
    ///
    /// `skipped` wins over `success`; a result that is neither skipped nor
    /// successful is a failure.
    pub fn from_flags(success: bool, skipped: bool) -> Self {
        if skipped {
            Outcome::Skipped
        } else if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// The lowercase word shown in the detailed tree.
    pub fn word(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Skipped => "skipped",
        }
    }
}

// ============================================================================
// Per-test completion payload
// ============================================================================

/// One completed test, as delivered by the host runner.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCompletion {
    /// Nested suite names leading to the test; may be empty
    pub suite_path: Vec<String>,

    /// Test description; unique only within its suite path
    pub description: String,

    pub success: bool,
    pub skipped: bool,
}

// ============================================================================
// Suite tree
// ============================================================================

/// One nesting level of suite names.
///
/// A node may hold both nested suites and tests recorded directly at this
/// level. Both maps keep first-seen insertion order, which the renderer
/// relies on for deterministic output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuiteNode {
    #[serde(default)]
    pub children: IndexMap<String, SuiteNode>,

    #[serde(default)]
    pub results: IndexMap<String, Outcome>,
}

impl SuiteNode {
    /// Whether this node holds no results and no child suites.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.results.is_empty()
    }
}

// ============================================================================
// Per-target record
// ============================================================================

/// Aggregated results for one execution target.
///
/// Counters track event arrivals, not unique tests: re-reporting a
/// description overwrites the stored outcome but still increments the
/// counters, so `total_count` can exceed the number of entries in the tree.
/// The invariant `total_count = success + failure + skipped` holds after
/// every recorded event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetRecord {
    /// Display name, fixed at first observation of the target id
    pub name: String,

    pub success_count: usize,
    pub failure_count: usize,
    pub skipped_count: usize,
    pub total_count: usize,

    /// Top of this target's suite tree
    pub root: SuiteNode,
}

impl TargetRecord {
    /// Fresh zero-valued record for a newly observed target.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            success_count: 0,
            failure_count: 0,
            skipped_count: 0,
            total_count: 0,
            root: SuiteNode::default(),
        }
    }
}
