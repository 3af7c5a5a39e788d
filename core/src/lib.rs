#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Signal Desk workspace.
//!
//! This crate defines the typed vocabulary that connects the deterministic
//! synthesis systems, the run archive, and adapters. Every record here is
//! produced exactly once by a synthesis call and never mutated afterwards;
//! consumers read, filter, and serialize runs but do not edit them. All
//! classification fields are closed enums so that every consumption site can
//! match exhaustively instead of comparing free-form strings.
//!
//! Serialized field and variant names reproduce the briefing wire casing:
//! `camelCase` fields and `SCREAMING_SNAKE_CASE` classification variants.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed named category across which scores, items, and rumors are distributed.
///
/// The variant declaration order is the catalog order. [`SectorId::ALL`]
/// exposes that order directly, and the derived `Ord` follows it, so a
/// `BTreeMap<SectorId, _>` iterates sectors exactly as the catalog lists them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorId {
    /// Digital-asset markets and infrastructure.
    Crypto,
    /// Global macroeconomics and policy.
    Macro,
    /// Geopolitical developments and conflicts.
    Geopolitics,
    /// Technology and innovation.
    Tech,
    /// The financial system and credit markets.
    Finance,
    /// Energy production and distribution.
    Energy,
    /// Industrial production and materials.
    Industrials,
    /// Transport and logistics networks.
    Transport,
    /// Healthcare and life sciences.
    Healthcare,
}

impl SectorId {
    /// Complete sector catalog in fixed catalog order.
    pub const ALL: [Self; 9] = [
        Self::Crypto,
        Self::Macro,
        Self::Geopolitics,
        Self::Tech,
        Self::Finance,
        Self::Energy,
        Self::Industrials,
        Self::Transport,
        Self::Healthcare,
    ];

    /// Wire identifier of the sector, e.g. `"CRYPTO"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Crypto => "CRYPTO",
            Self::Macro => "MACRO",
            Self::Geopolitics => "GEOPOLITICS",
            Self::Tech => "TECH",
            Self::Finance => "FINANCE",
            Self::Energy => "ENERGY",
            Self::Industrials => "INDUSTRIALS",
            Self::Transport => "TRANSPORT",
            Self::Healthcare => "HEALTHCARE",
        }
    }

    /// Human-readable sector label, e.g. `"Crypto Sector"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crypto => "Crypto Sector",
            Self::Macro => "Global Macro & Policy",
            Self::Geopolitics => "Geopolitics & Conflicts",
            Self::Tech => "Tech & Innovation",
            Self::Finance => "Financial System",
            Self::Energy => "Energy Sector",
            Self::Industrials => "Industrials & Materials",
            Self::Transport => "Transport & Logistics",
            Self::Healthcare => "Healthcare",
        }
    }
}

/// Classification of a run derived from its hour of day.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunType {
    /// Run generated before 10:00.
    MorningBrief,
    /// Run generated between 10:00 and 15:59.
    MiddayUpdate,
    /// Run generated at 16:00 or later.
    NightCap,
}

impl RunType {
    /// Classifies a run by its hour of day.
    ///
    /// The boundaries are half-open: `[0, 10)` is a morning brief, `[10, 16)`
    /// a midday update, and everything from 16 upward a night cap. Hours of
    /// 24 or more classify as night caps; the synthesizer does not validate
    /// the hour beyond numeric parsing.
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        if hour < 10 {
            Self::MorningBrief
        } else if hour < 16 {
            Self::MiddayUpdate
        } else {
            Self::NightCap
        }
    }
}

/// Overall outcome of a synthesis run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Every pipeline stage completed.
    Ok,
    /// The run completed with degraded coverage.
    Partial,
    /// The run failed outright. The synthesizer never emits this value; it
    /// remains in the vocabulary because consumers recognise it.
    Fail,
}

/// Distinguishes news coverage from research output.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// Wire and press coverage.
    News,
    /// Analyst and desk research.
    Research,
}

/// Assessed market impact of an intel item.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    /// Expected to move markets.
    High,
    /// Noticeable but contained effect.
    Medium,
    /// Background signal.
    Low,
}

/// Model confidence attached to a sector score.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    /// Strong agreement across signals.
    High,
    /// Mixed signal agreement.
    Medium,
    /// Weak or conflicting signals.
    Low,
}

/// Verification state of a sector score.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Cross-checked against independent sources.
    Verified,
    /// Awaiting a second source.
    Provisional,
    /// Contradicted or suspect; held for review.
    Flagged,
}

/// Verification state of a rumor claim.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RumorStatus {
    /// Confirmed by independent reporting. The synthesizer never emits this
    /// value; it remains in the vocabulary because consumers recognise it.
    Verified,
    /// Credibility score above 70.
    Plausible,
    /// No corroboration yet.
    Unverified,
}

/// Risk level derived from a rumor's credibility score.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RumorRiskLevel {
    /// Score of 80 or above.
    Critical,
    /// Score in `[60, 80)`.
    High,
    /// Score in `[40, 60)`.
    Moderate,
    /// Score below 40.
    Low,
}

impl RumorRiskLevel {
    /// Maps a credibility score onto its risk level.
    ///
    /// The thresholds are monotonic and exhaustive: every score maps to
    /// exactly one level, with 80, 60, and 40 as the inclusive lower bounds
    /// of `Critical`, `High`, and `Moderate`.
    #[must_use]
    pub const fn for_score(score: i32) -> Self {
        if score >= 80 {
            Self::Critical
        } else if score >= 60 {
            Self::High
        } else if score >= 40 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Taxonomy bucket a rumor claim falls into.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RumorTaxonomy {
    /// Market microstructure and positioning.
    MarketStructure,
    /// Government and central-bank policy.
    Policy,
    /// Cross-border and conflict developments.
    Geopolitics,
    /// Breaches, vulnerabilities, and security incidents.
    Security,
    /// Regulatory enforcement and rulemaking.
    Regulatory,
}

impl RumorTaxonomy {
    /// Complete taxonomy in fixed declaration order.
    pub const ALL: [Self; 5] = [
        Self::MarketStructure,
        Self::Policy,
        Self::Geopolitics,
        Self::Security,
        Self::Regulatory,
    ];
}

/// Unique identifier assigned to a synthesis run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Creates a new run identifier from the provided value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Retrieves the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a piece of evidence backing a sector score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRef {
    /// Display label of the evidence source.
    pub label: String,
    /// Link to the evidence source.
    pub url: String,
}

/// Scoring profile computed for one sector within a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    /// Momentum sub-score, drawn from `[10, 90]`.
    pub momentum: i32,
    /// Risk sub-score, drawn from `[20, 95]`.
    pub risk: i32,
    /// Liquidity sub-score, drawn from `[30, 85]`.
    pub liquidity: i32,
    /// Policy sub-score, drawn from `[15, 95]`.
    pub policy: i32,
    /// Model confidence in the scoring.
    pub confidence: Confidence,
    /// Free-text explanation of the dominant drivers.
    pub reasoning: String,
    /// Ordered evidence references backing the score.
    pub evidence: Vec<EvidenceRef>,
    /// Verification state of the score.
    pub verification_status: VerificationStatus,
}

impl ScoreSet {
    /// Mean of the four sub-scores, rounded half toward positive infinity.
    ///
    /// This is the composite figure consumers display next to a sector; the
    /// synthesizer itself never stores it.
    #[must_use]
    pub const fn composite(&self) -> i32 {
        (self.momentum + self.risk + self.liquidity + self.policy + 2).div_euclid(4)
    }
}

/// One news or research record within a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelItem {
    /// Identifier unique within the run, e.g. `"item-run-2024-01-15-1900-0"`.
    pub id: String,
    /// Sector the item is affiliated with.
    #[serde(rename = "sectorId")]
    pub sector: SectorId,
    /// Whether the item is news coverage or research output.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Templated headline with all placeholders resolved.
    pub title: String,
    /// Templated summary paragraph.
    pub summary: String,
    /// Publishing source label.
    pub source: String,
    /// Link to the item.
    pub url: String,
    /// Publication timestamp in `YYYY-MM-DDTHH:MM:00Z` form.
    pub published_at: String,
    /// Assessed market impact.
    pub impact: Impact,
    /// Tag set: sector code, sanitized event, and a global marker.
    pub tags: Vec<String>,
}

/// Numeric breakdown behind a rumor's credibility score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RumorBreakdown {
    /// Credibility of the originating sources, drawn from `[10, 90]`.
    pub source_credibility: i32,
    /// How widely the narrative has spread, drawn from `[20, 100]`.
    pub narrative_spread: i32,
    /// Strength of supporting evidence, drawn from `[5, 60]`.
    pub evidence_strength: i32,
}

/// One unverified claim circulating in a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RumorItem {
    /// Identifier unique within the run, e.g. `"rumor-run-2024-01-15-1900-0"`.
    pub id: String,
    /// The claim text, including the affected sector label.
    pub claim: String,
    /// Verification state derived from the credibility score.
    pub status: RumorStatus,
    /// Credibility score, drawn from `[15, 95]`.
    pub score: i32,
    /// Risk level derived from the credibility score.
    pub risk_level: RumorRiskLevel,
    /// Numeric breakdown behind the score.
    pub breakdown: RumorBreakdown,
    /// Number of evidence fragments collected, drawn from `[0, 5]`.
    pub evidence_count: i32,
    /// Channels the claim was observed on.
    pub sources: Vec<String>,
    /// Taxonomy bucket the claim falls into.
    pub taxonomy: RumorTaxonomy,
}

/// Aggregate snapshot computed for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    /// Report date the snapshot covers, in `YYYY-MM-DD` form.
    pub date: String,
    /// Total number of items and rumors in the run.
    pub total_items: usize,
    /// Day-over-day risk delta in basis points, drawn from `[-15, 15]`.
    pub risk_shift: i32,
    /// Sector holding the highest risk sub-score; catalog order breaks ties.
    pub top_sector: SectorId,
    /// Source coverage percentage, rounded to one decimal.
    pub coverage_pct: f64,
}

/// The unit of synthesis output: one complete intelligence briefing.
///
/// A `RunRecord` is produced atomically by one synthesis call and never
/// mutated after construction. Sector scores are keyed by [`SectorId`] in a
/// `BTreeMap`, so iteration follows catalog order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    /// Identifier of the run, e.g. `"run-2024-01-15-1900"`.
    pub run_id: RunId,
    /// Date the briefing reports on, in `YYYY-MM-DD` form.
    pub report_date: String,
    /// Generation timestamp in `YYYY-MM-DDTHH:MM:00.000+03:00` form.
    pub generated_at: String,
    /// Classification derived from the run's hour of day.
    pub run_type: RunType,
    /// Overall outcome of the run.
    pub status: RunStatus,
    /// Scoring profile per sector, in catalog order.
    pub scores: BTreeMap<SectorId, ScoreSet>,
    /// News and research items gathered for the run.
    pub items: Vec<IntelItem>,
    /// Rumor claims detected during the run.
    pub rumors: Vec<RumorItem>,
    /// Pipeline log trail, six fixed-format lines.
    pub logs: Vec<String>,
    /// Aggregate snapshot of the run.
    pub snapshot: DailySnapshot,
}

impl RunRecord {
    /// Items affiliated with the provided sector, in run order.
    #[must_use]
    pub fn items_for_sector(&self, sector: SectorId) -> Vec<&IntelItem> {
        self.items
            .iter()
            .filter(|item| item.sector == sector)
            .collect()
    }

    /// Items of the provided kind, in run order.
    #[must_use]
    pub fn items_of_kind(&self, kind: ItemKind) -> Vec<&IntelItem> {
        self.items.iter().filter(|item| item.kind == kind).collect()
    }

    /// Case-insensitive containment search over item titles, summaries, and
    /// tags. An empty needle yields no matches.
    #[must_use]
    pub fn search_items(&self, needle: &str) -> Vec<&IntelItem> {
        if needle.is_empty() {
            return Vec::new();
        }

        let needle = needle.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.summary.to_lowercase().contains(&needle)
                    || item
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
