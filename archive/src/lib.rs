#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Application-scoped store for synthesized runs.
//!
//! A [`RunArchive`] is built exactly once by the host at startup through an
//! explicit factory call and owned for the rest of the process. It never
//! mutates the records it holds; read access goes through the [`query`]
//! module, and dropping the archive is the only form of deletion.

use signal_desk_core::RunRecord;

/// Immutable collection of synthesized runs, in build order.
#[derive(Clone, Debug, PartialEq)]
pub struct RunArchive {
    runs: Vec<RunRecord>,
}

impl RunArchive {
    /// Creates an archive from runs in their build order.
    ///
    /// Build order is preserved verbatim: the history builder emits the most
    /// recent date first with the night-cap run leading each date, and every
    /// query that talks about "first" means first in this order.
    #[must_use]
    pub fn from_runs(runs: Vec<RunRecord>) -> Self {
        Self { runs }
    }

    /// All archived runs, in build order.
    #[must_use]
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Number of archived runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the archive holds no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Read-only queries over an archive.
pub mod query {
    use super::RunArchive;
    use signal_desk_core::{RunId, RunRecord};

    /// Retrieves the most recently generated run: the first in build order.
    #[must_use]
    pub fn latest_run(archive: &RunArchive) -> Option<&RunRecord> {
        archive.runs.first()
    }

    /// Looks a run up by its exact identifier.
    ///
    /// Returns `None` when the identifier is unknown; any fallback (the
    /// briefing view falls back to the latest run) is the caller's decision.
    #[must_use]
    pub fn run_by_id<'a>(archive: &'a RunArchive, run_id: &RunId) -> Option<&'a RunRecord> {
        archive.runs.iter().find(|run| &run.run_id == run_id)
    }

    /// All runs reporting on one date, sorted by generation timestamp
    /// descending.
    #[must_use]
    pub fn runs_for_date<'a>(archive: &'a RunArchive, date: &str) -> Vec<&'a RunRecord> {
        let mut runs: Vec<&RunRecord> = archive
            .runs
            .iter()
            .filter(|run| run.report_date == date)
            .collect();
        runs.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        runs
    }

    /// Distinct report dates in build order: most recent first.
    #[must_use]
    pub fn report_dates(archive: &RunArchive) -> Vec<&str> {
        let mut dates: Vec<&str> = Vec::new();
        for run in &archive.runs {
            if !dates.contains(&run.report_date.as_str()) {
                dates.push(&run.report_date);
            }
        }
        dates
    }
}
