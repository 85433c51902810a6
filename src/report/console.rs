use crate::report::style::{StyleTag, Styler};
use crate::store::result_store::ResultStore;
use crate::store::store_model::{Outcome, SuiteNode, TargetRecord};

// ============================================================================
// Renderer configuration
// ============================================================================

/// Which result lines the detailed tree shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerboseOutput {
    /// Every recorded result
    #[default]
    All,
    /// Failures only; suites with no failing descendant are omitted
    /// entirely, headers included
    OnlyFailure,
}

impl VerboseOutput {
    /// `"only-failure"` selects failure filtering; anything else shows all.
    pub fn from_name(name: &str) -> Self {
        if name == "only-failure" {
            VerboseOutput::OnlyFailure
        } else {
            VerboseOutput::All
        }
    }
}

/// How color is applied to a result line.
///
/// The two modes are different text-composition orders, not just different
/// color scopes: `Full` styles the outcome word and then splices it into
/// the line, `Plain` composes the whole line first and styles it as one
/// unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Full,
    #[default]
    Plain,
}

impl ColorMode {
    /// `"full"` selects inline word coloring; anything else is plain.
    pub fn from_name(name: &str) -> Self {
        if name == "full" {
            ColorMode::Full
        } else {
            ColorMode::Plain
        }
    }
}

/// Read-only renderer settings for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReporterConfig {
    pub verbose_output: VerboseOutput,
    pub color: ColorMode,
}

// ============================================================================
// Console renderer — suite trees and per-target summaries
// ============================================================================

/// Renders a [`ResultStore`] snapshot as indentation-structured text.
pub struct ConsoleRenderer<'a> {
    config: ReporterConfig,
    styler: &'a dyn Styler,
}

impl<'a> ConsoleRenderer<'a> {
    pub fn new(config: ReporterConfig, styler: &'a dyn Styler) -> Self {
        Self { config, styler }
    }

    /// Render one target's suite tree.
    ///
    /// Returns `None` when nothing is emitted at any depth, so the caller
    /// can skip the per-target header. In only-failure mode that happens
    /// whenever no descendant test failed.
    pub fn render_target(&self, record: &TargetRecord) -> Option<String> {
        self.render_node(&record.root, "")
    }

    fn render_node(&self, node: &SuiteNode, indent: &str) -> Option<String> {
        let mut output = String::new();

        for (description, outcome) in &node.results {
            if self.config.verbose_output == VerboseOutput::OnlyFailure
                && *outcome != Outcome::Failure
            {
                continue;
            }

            let tag = StyleTag::for_outcome(*outcome);
            let line = match self.config.color {
                ColorMode::Full => format!(
                    "{indent} * {description}: {}",
                    self.styler.colorize(outcome.word(), tag)
                ),
                ColorMode::Plain => self.styler.colorize(
                    &format!("{indent} * {description}: {}", outcome.word()),
                    tag,
                ),
            };
            output.push_str(&line);
            output.push('\n');
        }

        for (suite_name, child) in &node.children {
            let child_indent = format!("  {indent}");
            if let Some(child_text) = self.render_node(child, &child_indent) {
                output.push_str(&format!(
                    "{indent} - {}: \n",
                    self.styler.colorize(suite_name, StyleTag::Bold)
                ));
                output.push_str(&child_text);
            }
        }

        if output.is_empty() { None } else { Some(output) }
    }

    /// One-line count summary for a target.
    ///
    /// Zero-count categories are always omitted. A single-test run shows
    /// bare labels joined with a space; larger runs show counted labels
    /// joined with a comma.
    pub fn render_summary_line(&self, record: &TargetRecord) -> String {
        if record.total_count == 0 {
            return self.styler.colorize("no tests", StyleTag::NoTests);
        }

        let mut responses = Vec::new();
        if record.total_count == 1 {
            if record.success_count > 0 {
                responses.push(self.styler.colorize("ok", StyleTag::Success));
            }
            if record.failure_count > 0 {
                responses.push(self.styler.colorize("failed", StyleTag::Failure));
            }
            if record.skipped_count > 0 {
                responses.push(self.styler.colorize("skipped", StyleTag::Skipped));
            }
            responses.join(" ")
        } else {
            if record.success_count > 0 {
                responses.push(
                    self.styler
                        .colorize(&format!("{} ok", record.success_count), StyleTag::Success),
                );
            }
            if record.failure_count > 0 {
                responses.push(
                    self.styler.colorize(
                        &format!("{} failed", record.failure_count),
                        StyleTag::Failure,
                    ),
                );
            }
            if record.skipped_count > 0 {
                responses.push(
                    self.styler.colorize(
                        &format!("{} skipped", record.skipped_count),
                        StyleTag::Skipped,
                    ),
                );
            }
            responses.join(", ")
        }
    }

    /// Render the whole run: every target's tree under a section header,
    /// then the per-browser summary section. Ends with a blank line.
    pub fn render_run(&self, store: &ResultStore) -> String {
        let mut out = String::new();

        if store.is_empty() {
            out.push_str(&self.styler.colorize("\n\nNo results found.\n", StyleTag::Header));
            out.push('\n');
            return out;
        }

        let mut suite_output = String::new();
        for (_id, record) in store.iter() {
            if let Some(tree) = self.render_target(record) {
                suite_output.push_str(
                    &self
                        .styler
                        .colorize(&format!("\n{}\n", record.name), StyleTag::Header),
                );
                suite_output.push_str(&tree);
            }
        }

        if !suite_output.is_empty() {
            out.push('\n');
            let heading = match self.config.verbose_output {
                VerboseOutput::OnlyFailure => "Test failures by browser:\n",
                VerboseOutput::All => "Suites and tests results:\n",
            };
            out.push_str(&self.styler.colorize(heading, StyleTag::Header));
            out.push('\n');
            out.push_str(&suite_output);
            out.push('\n');
        }

        out.push_str(&self.styler.colorize("\nPer browser summary:\n\n", StyleTag::Header));
        for (_id, record) in store.iter() {
            out.push_str(&format!(
                " - {}: {} tests\n",
                self.styler.colorize(&record.name, StyleTag::Bold),
                record.total_count
            ));
            out.push_str(&format!("   - {}\n", self.render_summary_line(record)));
        }

        out.push('\n');
        out
    }
}
