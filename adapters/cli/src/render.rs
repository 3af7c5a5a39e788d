//! Plain-text rendering of runs for the terminal.
//!
//! Every classification enum is matched exhaustively here; adding a variant
//! to the core vocabulary forces this module to decide how to print it.

use signal_desk_core::{
    Confidence, Impact, ItemKind, RumorRiskLevel, RumorStatus, RumorTaxonomy, RunRecord,
    RunStatus, RunType, VerificationStatus,
};

/// Renders one complete briefing: header, snapshot, sector scores, items,
/// rumors, and the pipeline log trail.
pub(crate) fn briefing(run: &RunRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} - {} ===\n",
        run_type_label(run.run_type),
        run.report_date
    ));
    out.push_str(&format!(
        "Run {} | status {} | generated {}\n\n",
        run.run_id,
        status_label(run.status),
        run.generated_at
    ));

    let shift = signed(run.snapshot.risk_shift);
    out.push_str(&format!(
        "Snapshot: {} signals | risk shift {shift} bps | top sector {} | coverage {:.1}%\n\n",
        run.snapshot.total_items,
        run.snapshot.top_sector.label(),
        run.snapshot.coverage_pct
    ));

    out.push_str("Sector scores:\n");
    for (sector, score) in &run.scores {
        out.push_str(&format!(
            "  {:<12} composite {:>3} | momentum {:>2} risk {:>2} liquidity {:>2} policy {:>2} \
             | confidence {} | {}\n",
            sector.code(),
            score.composite(),
            score.momentum,
            score.risk,
            score.liquidity,
            score.policy,
            confidence_label(score.confidence),
            verification_label(score.verification_status)
        ));
    }

    out.push_str(&format!("\nItems ({}):\n", run.items.len()));
    for item in &run.items {
        out.push_str(&format!(
            "  [{:<6}] [{:<8}] {} ({}, {})\n",
            impact_label(item.impact),
            kind_label(item.kind),
            item.title,
            item.source,
            item.published_at
        ));
    }

    out.push_str(&format!("\nRumors ({}):\n", run.rumors.len()));
    for rumor in &run.rumors {
        out.push_str(&format!(
            "  [{:<8}] {} (score {}, {}) - {}\n",
            risk_label(rumor.risk_level),
            rumor.claim,
            rumor.score,
            rumor_status_label(rumor.status),
            taxonomy_label(rumor.taxonomy)
        ));
        out.push_str(&format!(
            "             credibility {} | spread {} | strength {} | {} evidence fragments\n",
            rumor.breakdown.source_credibility,
            rumor.breakdown.narrative_spread,
            rumor.breakdown.evidence_strength,
            rumor.evidence_count
        ));
    }

    out.push_str("\nLog trail:\n");
    for line in &run.logs {
        out.push_str(&format!("  {line}\n"));
    }

    out
}

/// Renders the one-line history entry for a run.
pub(crate) fn history_line(run: &RunRecord) -> String {
    format!(
        "{:<24} {} {}  {:<13} {:<7} {:>2} items  {} rumors",
        run.run_id.as_str(),
        run.report_date,
        &run.generated_at[11..16],
        run_type_label(run.run_type),
        status_label(run.status),
        run.items.len(),
        run.rumors.len()
    )
}

/// Renders the item-search results for one run.
pub(crate) fn search_results(run: &RunRecord, needle: &str) -> String {
    let matches = run.search_items(needle);
    let mut out = format!(
        "{} match(es) for {needle:?} in {}:\n",
        matches.len(),
        run.run_id
    );
    for item in matches {
        out.push_str(&format!(
            "  [{:<6}] [{:<8}] {} - tags {}\n",
            impact_label(item.impact),
            kind_label(item.kind),
            item.title,
            item.tags.join(" ")
        ));
    }
    out
}

fn run_type_label(run_type: RunType) -> &'static str {
    match run_type {
        RunType::MorningBrief => "MORNING BRIEF",
        RunType::MiddayUpdate => "MIDDAY UPDATE",
        RunType::NightCap => "NIGHT CAP",
    }
}

fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Ok => "OK",
        RunStatus::Partial => "PARTIAL",
        RunStatus::Fail => "FAIL",
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::News => "news",
        ItemKind::Research => "research",
    }
}

fn impact_label(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "HIGH",
        Impact::Medium => "MEDIUM",
        Impact::Low => "LOW",
    }
}

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "HIGH",
        Confidence::Medium => "MEDIUM",
        Confidence::Low => "LOW",
    }
}

fn verification_label(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Verified => "VERIFIED",
        VerificationStatus::Provisional => "PROVISIONAL",
        VerificationStatus::Flagged => "FLAGGED",
    }
}

fn rumor_status_label(status: RumorStatus) -> &'static str {
    match status {
        RumorStatus::Verified => "verified",
        RumorStatus::Plausible => "plausible",
        RumorStatus::Unverified => "unverified",
    }
}

fn risk_label(level: RumorRiskLevel) -> &'static str {
    match level {
        RumorRiskLevel::Critical => "CRITICAL",
        RumorRiskLevel::High => "HIGH",
        RumorRiskLevel::Moderate => "MODERATE",
        RumorRiskLevel::Low => "LOW",
    }
}

fn taxonomy_label(taxonomy: RumorTaxonomy) -> &'static str {
    match taxonomy {
        RumorTaxonomy::MarketStructure => "Market Structure",
        RumorTaxonomy::Policy => "Policy",
        RumorTaxonomy::Geopolitics => "Geopolitics",
        RumorTaxonomy::Security => "Security",
        RumorTaxonomy::Regulatory => "Regulatory",
    }
}

fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
