#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line host for the Signal Desk briefing synthesizer.
//!
//! The binary builds the run archive exactly once at startup, anchored at an
//! explicit `--anchor` date or the local calendar date, and then serves
//! read-only views of it: rendered briefings, the run history, item search,
//! and a JSON export. The `run` subcommand synthesizes a single run outside
//! any archive.

mod render;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use signal_desk_archive::{query, RunArchive};
use signal_desk_core::{RunId, RunRecord};
use signal_desk_system_history::{build_history, today_local, DEFAULT_HISTORY_DAYS};
use signal_desk_system_synthesis::synthesize;

#[derive(Parser)]
#[command(
    name = "signal-desk",
    version,
    about = "Deterministic synthesizer for mock intelligence briefings"
)]
struct Cli {
    /// Anchor date of the archive window; defaults to the local date.
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    anchor: Option<String>,

    /// Number of days before the anchor to include in the archive.
    #[arg(long, global = true, default_value_t = DEFAULT_HISTORY_DAYS)]
    days: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one briefing from the archive.
    Brief {
        /// Identifier of the run to render; defaults to the latest run.
        #[arg(long, value_name = "RUN_ID")]
        run: Option<String>,
    },
    /// List every archived run, one line each.
    History,
    /// Search item titles, summaries, and tags within one run.
    Search {
        /// Text to search for, case-insensitively.
        needle: String,
        /// Identifier of the run to search; defaults to the latest run.
        #[arg(long, value_name = "RUN_ID")]
        run: Option<String>,
    },
    /// Export the archive, or one run, as JSON.
    Export {
        /// Identifier of a single run to export instead of the archive.
        #[arg(long, value_name = "RUN_ID")]
        run: Option<String>,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Synthesize a single run outside any archive.
    Run {
        /// Report date in YYYY-MM-DD form.
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,
        /// Generation time in HH:MM form.
        #[arg(long, value_name = "HH:MM")]
        time: String,
        /// Identifier to file the run under.
        #[arg(long, value_name = "RUN_ID")]
        run_id: String,
        /// Emit JSON instead of the rendered briefing.
        #[arg(long)]
        json: bool,
        /// Pretty-print the JSON output; implies --json.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let Cli {
        anchor,
        days,
        command,
    } = Cli::parse();

    match command {
        Command::Run {
            date,
            time,
            run_id,
            json,
            pretty,
        } => {
            let run = synthesize(&date, &time, &run_id)
                .with_context(|| format!("failed to synthesize run {run_id:?}"))?;
            if json || pretty {
                println!("{}", encode(&run, pretty)?);
            } else {
                print!("{}", render::briefing(&run));
            }
        }
        Command::Brief { run } => {
            let archive = build_archive(anchor.as_deref(), days)?;
            let run = select_run(&archive, run.as_deref())?;
            print!("{}", render::briefing(run));
        }
        Command::History => {
            let archive = build_archive(anchor.as_deref(), days)?;
            for date in query::report_dates(&archive) {
                for run in query::runs_for_date(&archive, date) {
                    println!("{}", render::history_line(run));
                }
            }
        }
        Command::Search { needle, run } => {
            let archive = build_archive(anchor.as_deref(), days)?;
            let run = select_run(&archive, run.as_deref())?;
            print!("{}", render::search_results(run, &needle));
        }
        Command::Export { run, pretty } => {
            let archive = build_archive(anchor.as_deref(), days)?;
            match run {
                Some(id) => {
                    let run = select_run(&archive, Some(&id))?;
                    println!("{}", encode(run, pretty)?);
                }
                None => println!("{}", encode(&archive.runs(), pretty)?),
            }
        }
    }
    Ok(())
}

/// Builds the application-scoped archive the subcommands read from.
fn build_archive(anchor: Option<&str>, days: u32) -> Result<RunArchive> {
    let anchor = match anchor {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid anchor date {text:?}, expected YYYY-MM-DD"))?,
        None => today_local(),
    };
    let runs = build_history(anchor, days)
        .with_context(|| format!("failed to build a {days}-day history anchored at {anchor}"))?;
    Ok(RunArchive::from_runs(runs))
}

fn select_run<'a>(archive: &'a RunArchive, run_id: Option<&str>) -> Result<&'a RunRecord> {
    match run_id {
        Some(id) => query::run_by_id(archive, &RunId::new(id)).ok_or_else(|| {
            anyhow!("run {id:?} is not in the archive; `signal-desk history` lists known runs")
        }),
        None => query::latest_run(archive).ok_or_else(|| anyhow!("the archive holds no runs")),
    }
}

fn encode<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize to JSON")
}
