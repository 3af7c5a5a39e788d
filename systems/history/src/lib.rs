#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! History builder that synthesizes runs across a date range.
//!
//! [`build_history`] walks backwards from an explicit anchor date and
//! synthesizes three runs per calendar day at the fixed times 19:00, 13:00,
//! and 07:00. The anchor is a parameter rather than a hidden clock read, so
//! the builder itself is pure and reproducible; [`today_local`] is the single
//! wall-clock seam hosts use to anchor at the current local date.

use chrono::{Days, Local, NaiveDate};
use signal_desk_core::RunRecord;
use signal_desk_system_synthesis::{synthesize, SynthesisError};
use thiserror::Error;

/// History depth hosts use when the caller does not choose one.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Generation times synthesized for every date, in emission order.
///
/// The order is intentional and observable: output is grouped by date from
/// the anchor backwards, and within a date runs appear night cap first. The
/// collection is *not* sorted by timestamp.
pub const RUN_TIMES: [&str; 3] = ["19:00", "13:00", "07:00"];

/// Errors produced while building a run history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Walking `days_back` days before the anchor left the calendar range
    /// the date arithmetic supports.
    #[error("history window of {days_back} days before {anchor} leaves the supported calendar range")]
    RangeExceedsCalendar {
        /// The anchor date the window started from.
        anchor: NaiveDate,
        /// The requested depth in days.
        days_back: u32,
    },
    /// A run rejected its inputs during synthesis.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Builds the run history for the window `[anchor - days_back, anchor]`.
///
/// Produces `(days_back + 1) * 3` records: for each date, iterated from the
/// anchor backwards, the three [`RUN_TIMES`] runs in emission order. Run
/// identifiers encode the date and time as `run-{date}-{HHMM}`, which also
/// fixes each run's seed, so a pinned anchor reproduces the same history on
/// every call.
///
/// # Errors
///
/// Returns [`HistoryError::RangeExceedsCalendar`] when the window extends
/// past the earliest representable calendar date.
pub fn build_history(anchor: NaiveDate, days_back: u32) -> Result<Vec<RunRecord>, HistoryError> {
    let mut runs = Vec::with_capacity((days_back as usize + 1) * RUN_TIMES.len());
    for offset in 0..=days_back {
        let date = anchor
            .checked_sub_days(Days::new(u64::from(offset)))
            .ok_or(HistoryError::RangeExceedsCalendar { anchor, days_back })?;
        let date_text = date.format("%Y-%m-%d").to_string();
        for time in RUN_TIMES {
            let run_id = run_id_for(&date_text, time);
            runs.push(synthesize(&date_text, time, &run_id)?);
        }
    }
    Ok(runs)
}

/// Canonical run identifier for a date and generation time.
///
/// `run_id_for("2024-01-15", "19:00")` is `"run-2024-01-15-1900"`.
#[must_use]
pub fn run_id_for(date: &str, time: &str) -> String {
    format!("run-{date}-{}", time.replace(':', ""))
}

/// Reads the current local calendar date.
///
/// This is the only wall-clock read in the workspace. Hosts call it once to
/// anchor [`build_history`]; tests pin the anchor instead.
#[must_use]
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::run_id_for;

    #[test]
    fn run_ids_encode_date_and_time() {
        assert_eq!(run_id_for("2024-01-15", "19:00"), "run-2024-01-15-1900");
        assert_eq!(run_id_for("2024-02-29", "07:00"), "run-2024-02-29-0700");
    }
}
