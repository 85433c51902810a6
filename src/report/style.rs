use owo_colors::OwoColorize;

use crate::store::store_model::Outcome;

// ============================================================================
// Styler capability — text decoration decoupled from the renderer
// ============================================================================

/// Semantic roles the renderer asks to have decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Green: passing tests, "ok" summary categories
    Success,
    /// Red: failing tests, "failed" summary categories
    Failure,
    /// Yellow: skipped tests
    Skipped,
    /// Magenta: the "no tests" summary marker
    NoTests,
    /// Bold: suite names and target names inline
    Bold,
    /// Bold + underline: section and per-target headers
    Header,
}

impl StyleTag {
    /// The tag carrying an outcome's color.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => StyleTag::Success,
            Outcome::Failure => StyleTag::Failure,
            Outcome::Skipped => StyleTag::Skipped,
        }
    }
}

/// Text decoration capability.
///
/// The renderer composes lines out of `colorize` calls and never emits
/// escape sequences itself, so non-terminal output can swap in
/// [`PlainStyler`] without touching the renderer.
pub trait Styler {
    fn colorize(&self, text: &str, tag: StyleTag) -> String;
}

/// ANSI terminal styling.
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn colorize(&self, text: &str, tag: StyleTag) -> String {
        match tag {
            StyleTag::Success => text.green().to_string(),
            StyleTag::Failure => text.red().to_string(),
            StyleTag::Skipped => text.yellow().to_string(),
            StyleTag::NoTests => text.magenta().to_string(),
            StyleTag::Bold => text.bold().to_string(),
            StyleTag::Header => text.bold().underline().to_string(),
        }
    }
}

/// Pass-through styling for files, pipes, and exact-match tests.
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn colorize(&self, text: &str, _tag: StyleTag) -> String {
        text.to_string()
    }
}
