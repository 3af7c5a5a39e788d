#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic run synthesizer for Signal Desk intelligence briefings.
//!
//! [`synthesize`] derives a seed from the report date and run identifier,
//! builds one draw sequence, and consumes it in a fixed documented order to
//! assemble an immutable [`RunRecord`]. For a fixed `(date, time, run_id)`
//! every call produces a deep-equal record; the function performs no I/O and
//! reads no clock. Draw order is part of the contract: the schedule is
//! spelled out at each phase below, and any reordering changes every value
//! drawn afterwards.

mod content;

use std::collections::BTreeMap;

use signal_desk_core::{
    Confidence, DailySnapshot, EvidenceRef, Impact, IntelItem, ItemKind, RumorBreakdown,
    RumorItem, RumorRiskLevel, RumorStatus, RumorTaxonomy, RunId, RunRecord, RunStatus, RunType,
    ScoreSet, SectorId, VerificationStatus,
};
use signal_desk_system_sequence::DrawSequence;
use thiserror::Error;

/// Number of leading seed characters echoed into the first log line.
const SEED_PREFIX_LEN: usize = 10;
/// Fixed timezone suffix of generation timestamps.
const GENERATED_AT_OFFSET: &str = "+03:00";

/// Errors produced when the synthesizer rejects its inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    /// The hour segment of the provided time failed numeric parsing. The
    /// synthesizer rejects this instead of defaulting, because run-type
    /// classification has no defined behavior for non-numeric hours.
    #[error("malformed time {time:?}: the hour segment must be numeric")]
    MalformedTime {
        /// The rejected time string.
        time: String,
    },
}

/// Synthesizes one complete intelligence briefing.
///
/// `date` is the report date in `YYYY-MM-DD` form, `time` the generation time
/// as `HH:MM`, and `run_id` the identifier the run is filed under. The seed
/// is `"{date}-{run_id}"`; the same inputs therefore always reproduce the
/// same record, while any change to either produces an unrelated stream.
///
/// # Errors
///
/// Returns [`SynthesisError::MalformedTime`] when the text before the first
/// `:` does not parse as an unsigned hour. Hours of 24 or more are accepted
/// and classify as night caps.
pub fn synthesize(date: &str, time: &str, run_id: &str) -> Result<RunRecord, SynthesisError> {
    let hour = parse_hour(time)?;
    let seed = format!("{date}-{run_id}");
    let mut sequence = DrawSequence::from_seed(&seed);

    let scores = draw_scores(&mut sequence);
    let items = draw_items(&mut sequence, date, run_id, hour);
    let rumors = draw_rumors(&mut sequence, run_id);

    // Tail draws, in order: risk shift, coverage whole part, coverage
    // fraction, run status, ingestion source count, NLP confidence.
    let risk_shift = sequence.int_in_range(-15, 15);
    let top_sector = top_risk_sector(&scores);
    let coverage_whole = sequence.int_in_range(92, 99);
    let coverage_pct = round_to_tenth(f64::from(coverage_whole) + sequence.next_unit() * 0.9);
    let status = if sequence.next_unit() > 0.05 {
        RunStatus::Ok
    } else {
        RunStatus::Partial
    };
    let ingestion_sources = sequence.int_in_range(5, 12);
    let nlp_confidence = sequence.int_in_range(80, 99);

    let logs = log_trail(
        time,
        &seed,
        items.len(),
        ingestion_sources,
        nlp_confidence,
        risk_shift,
        rumors.len(),
    );

    let snapshot = DailySnapshot {
        date: date.to_owned(),
        total_items: items.len() + rumors.len(),
        risk_shift,
        top_sector,
        coverage_pct,
    };

    Ok(RunRecord {
        run_id: RunId::new(run_id),
        report_date: date.to_owned(),
        generated_at: format!("{date}T{time}:00.000{GENERATED_AT_OFFSET}"),
        run_type: RunType::for_hour(hour),
        status,
        scores,
        items,
        rumors,
        logs,
        snapshot,
    })
}

fn parse_hour(time: &str) -> Result<u32, SynthesisError> {
    let hour_text = match time.split_once(':') {
        Some((hour, _)) => hour,
        None => time,
    };
    hour_text
        .parse::<u32>()
        .map_err(|_| SynthesisError::MalformedTime {
            time: time.to_owned(),
        })
}

fn draw_scores(sequence: &mut DrawSequence) -> BTreeMap<SectorId, ScoreSet> {
    let mut scores = BTreeMap::new();
    for sector in SectorId::ALL {
        // Nine draws per sector, in order: risk, momentum, liquidity, policy,
        // confidence, sigma magnitude, driver event, driver region,
        // verification. Confidence and verification are separate draws
        // against separate cutoff sets.
        let risk = sequence.int_in_range(20, 95);
        let momentum = sequence.int_in_range(10, 90);
        let liquidity = sequence.int_in_range(30, 85);
        let policy = sequence.int_in_range(15, 95);
        let confidence = confidence_for(sequence.next_unit());
        let sigma = sequence.int_in_range(2, 5);
        let event = *sequence.pick(&content::EVENTS);
        let region = *sequence.pick(&content::REGIONS);
        let verification = verification_for(sequence.next_unit());

        let reasoning = format!(
            "Algorithm detected {sigma} sigma move in {} signals. \
             Key drivers include {event} and {region} volatility.",
            sector.label()
        );
        let _ = scores.insert(
            sector,
            ScoreSet {
                momentum,
                risk,
                liquidity,
                policy,
                confidence,
                reasoning,
                evidence: evidence_refs(),
                verification_status: verification,
            },
        );
    }
    scores
}

fn draw_items(sequence: &mut DrawSequence, date: &str, run_id: &str, hour: u32) -> Vec<IntelItem> {
    let count = sequence.int_in_range(8, 15);
    let mut items = Vec::with_capacity(count as usize);
    for index in 0..count {
        // Per-item draws, in order: sector, news-vs-research, template,
        // region, event, outlet (news only), publish-hour offset, publish
        // minute, impact, tag event. Region and event are drawn even when
        // the template omits their placeholder.
        let sector = *sequence.pick(&SectorId::ALL);
        let is_news = sequence.next_unit() > 0.3;
        let template = if is_news {
            *sequence.pick(&content::NEWS_TEMPLATES)
        } else {
            *sequence.pick(&content::RESEARCH_TEMPLATES)
        };
        let region = *sequence.pick(&content::REGIONS);
        let event = *sequence.pick(&content::EVENTS);
        let title = fill_template(template, sector, region, event);
        let source = if is_news {
            (*sequence.pick(&content::NEWS_OUTLETS)).to_owned()
        } else {
            content::RESEARCH_SOURCE.to_owned()
        };
        let offset = sequence.int_in_range(1, 5);
        let publish_hour = hour.saturating_sub(offset as u32);
        let minute = sequence.int_in_range(0, 59);
        let impact = impact_for(sequence.next_unit());
        let tag_event = *sequence.pick(&content::EVENTS);

        items.push(IntelItem {
            id: format!("item-{run_id}-{index}"),
            sector,
            kind: if is_news {
                ItemKind::News
            } else {
                ItemKind::Research
            },
            title,
            summary: format!(
                "Automated analysis: Recent data points suggest significant impact on {} \
                 fundamentals due to external macro factors. Our models indicate elevated \
                 volatility in the short term.",
                sector.label()
            ),
            source,
            url: content::ITEM_URL.to_owned(),
            published_at: format!("{date}T{publish_hour:02}:{minute:02}:00Z"),
            impact,
            tags: vec![
                format!("#{}", sector.code()),
                format!("#{}", sanitize_tag(tag_event)),
                content::GLOBAL_TAG.to_owned(),
            ],
        });
    }
    items
}

fn draw_rumors(sequence: &mut DrawSequence, run_id: &str) -> Vec<RumorItem> {
    let count = sequence.int_in_range(2, 5);
    let mut rumors = Vec::with_capacity(count as usize);
    for index in 0..count {
        // Per-rumor draws, in order: credibility score, claim phrase, claim
        // sector, source credibility, narrative spread, evidence strength,
        // evidence count, taxonomy.
        let score = sequence.int_in_range(15, 95);
        let claim_phrase = *sequence.pick(&content::RUMOR_CLAIMS);
        let claim_sector = *sequence.pick(&SectorId::ALL);
        let breakdown = RumorBreakdown {
            source_credibility: sequence.int_in_range(10, 90),
            narrative_spread: sequence.int_in_range(20, 100),
            evidence_strength: sequence.int_in_range(5, 60),
        };
        let evidence_count = sequence.int_in_range(0, 5);
        let taxonomy = *sequence.pick(&RumorTaxonomy::ALL);

        rumors.push(RumorItem {
            id: format!("rumor-{run_id}-{index}"),
            claim: format!("{claim_phrase} in {}", claim_sector.label()),
            status: if score > 70 {
                RumorStatus::Plausible
            } else {
                RumorStatus::Unverified
            },
            score,
            risk_level: RumorRiskLevel::for_score(score),
            breakdown,
            evidence_count,
            sources: rumor_sources(),
            taxonomy,
        });
    }
    rumors
}

/// Resolves template placeholders in the fixed order sector, region, event.
/// Each step replaces only the first occurrence, so a resolved value that
/// happens to contain a placeholder-looking substring is never re-expanded.
fn fill_template(template: &str, sector: SectorId, region: &str, event: &str) -> String {
    template
        .replacen("{sector}", sector.label(), 1)
        .replacen("{region}", region, 1)
        .replacen("{event}", event, 1)
}

fn sanitize_tag(event: &str) -> String {
    event.split_whitespace().collect()
}

fn evidence_refs() -> Vec<EvidenceRef> {
    content::EVIDENCE_SOURCES
        .iter()
        .map(|label| EvidenceRef {
            label: (*label).to_owned(),
            url: content::ITEM_URL.to_owned(),
        })
        .collect()
}

fn rumor_sources() -> Vec<String> {
    content::RUMOR_SOURCES
        .iter()
        .map(|source| (*source).to_owned())
        .collect()
}

fn top_risk_sector(scores: &BTreeMap<SectorId, ScoreSet>) -> SectorId {
    // Catalog-order iteration plus a strict-greater fold: the first sector
    // holding the maximum risk sub-score wins ties.
    let mut top = SectorId::ALL[0];
    let mut top_risk = i32::MIN;
    for (sector, score) in scores {
        if score.risk > top_risk {
            top = *sector;
            top_risk = score.risk;
        }
    }
    top
}

fn confidence_for(draw: f64) -> Confidence {
    if draw > 0.4 {
        Confidence::High
    } else if draw > 0.2 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn verification_for(draw: f64) -> VerificationStatus {
    if draw > 0.3 {
        VerificationStatus::Verified
    } else if draw > 0.1 {
        VerificationStatus::Provisional
    } else {
        VerificationStatus::Flagged
    }
}

fn impact_for(draw: f64) -> Impact {
    if draw > 0.7 {
        Impact::High
    } else if draw > 0.4 {
        Impact::Medium
    } else {
        Impact::Low
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn log_trail(
    time: &str,
    seed: &str,
    item_count: usize,
    ingestion_sources: i32,
    nlp_confidence: i32,
    risk_shift: i32,
    rumor_count: usize,
) -> Vec<String> {
    let seed_prefix: String = seed.chars().take(SEED_PREFIX_LEN).collect();
    let shift = if risk_shift > 0 {
        format!("+{risk_shift}")
    } else {
        risk_shift.to_string()
    };
    vec![
        format!("[{time}] System Init: Seed {seed_prefix}"),
        format!("[{time}] Ingestion: {item_count} items processed from {ingestion_sources} sources"),
        format!("[{time}] NLP Engine: Sentiment analysis complete ({nlp_confidence}% confidence)"),
        format!("[{time}] Risk Calculation: Global shift {shift} basis points"),
        format!("[{time}] Rumor Scanner: {rumor_count} unverified claims detected"),
        format!("[{time}] Report Status: Generation complete"),
    ]
}
