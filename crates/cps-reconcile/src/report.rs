//! Run summary: the created/skipped/error partition, in row-encounter order.

use crate::outcome::RowOutcome;

/// Authoritative report of one reconciliation run.
///
/// Lists hold **original** property names, in the order rows were
/// encountered. No deduplication, no sorting; finalized by [`emit`] at the
/// end of the run and never mutated after.
///
/// [`emit`]: RunSummary::emit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// File one row's terminal outcome under its original property name.
    pub fn record(&mut self, original_name: &str, outcome: &RowOutcome) {
        let list = match outcome {
            RowOutcome::Created => &mut self.created,
            RowOutcome::Skipped(_) => &mut self.skipped,
            RowOutcome::Errored(_) => &mut self.errors,
        };
        list.push(original_name.to_string());
    }

    /// Total number of rows recorded.
    pub fn total(&self) -> usize {
        self.created.len() + self.skipped.len() + self.errors.len()
    }

    /// Emit the single end-of-run summary event with all three sequences
    /// verbatim.
    pub fn emit(&self) {
        tracing::info!(
            created = ?self.created,
            skipped = ?self.skipped,
            errors = ?self.errors,
            "run summary"
        );
    }
}
