//! Static content tables consumed by the synthesizer.
//!
//! Table order is load-bearing: picks index into these slices, so any
//! reordering or insertion changes every run synthesized afterwards.

/// Headline templates for news items. Placeholders are resolved in the fixed
/// order `{sector}`, `{region}`, `{event}`; no template repeats a placeholder.
pub(crate) const NEWS_TEMPLATES: [&str; 12] = [
    "Regulatory crackdown intensifies in {region}, impacting {sector} outlook.",
    "New supply chain bottlenecks emerge in {region} following {event}.",
    "Market volatility spikes as {sector} reacts to unexpected {event}.",
    "Major breakthrough in {sector} technology announced by leading firm.",
    "Institutional capital flows into {sector} reach yearly high.",
    "Central Bank signals policy shift affecting {sector} liquidity.",
    "Trade tensions escalate, threatening {sector} export volumes.",
    "Key infrastructure failure in {region} disrupts {sector} operations.",
    "Merger talks confirmed between top {sector} players.",
    "Analyst downgrade triggers sell-off in {sector} equities.",
    "Breaking: {sector} faces unprecedented regulatory scrutiny in {region}.",
    "Emerging market turmoil spreads to {sector} as {event} triggers panic.",
];

/// Headline templates for research items.
pub(crate) const RESEARCH_TEMPLATES: [&str; 7] = [
    "Deep Dive: The long-term impact of {event} on {sector} valuations.",
    "Q4 Outlook: Assessing structural risks in the {sector} market.",
    "Whitepaper: New methodology for pricing {sector} assets.",
    "Survey: Institutional sentiment towards {sector} shifts bearish.",
    "Analysis: Correlation breakdown between {sector} and macro indices.",
    "Strategic Report: {sector} positioning ahead of {event}.",
    "Risk Assessment: {sector} exposure to {region} developments.",
];

/// Claim phrases combined with a drawn sector label to form rumor claims.
pub(crate) const RUMOR_CLAIMS: [&str; 9] = [
    "Insider sources suggest imminent insolvency of major player",
    "Unverified reports of a massive data breach at top firm",
    "Whispers of a surprise regulatory ban coming next week",
    "Leaked memos indicate CEO resignation is planned",
    "Market chatter about a secret merger deal in late stages",
    "Speculation regarding a new government stimulus package",
    "Rumors of a critical vulnerability in widely used protocol",
    "Anonymous tip suggests massive short position building",
    "Industry insider claims major partnership announcement imminent",
];

/// Region vocabulary for `{region}` substitution.
pub(crate) const REGIONS: [&str; 7] = [
    "Asia-Pacific",
    "Eurozone",
    "North America",
    "MENA Region",
    "Emerging Markets",
    "East Africa",
    "Horn of Africa",
];

/// Event vocabulary for `{event}` substitution and item tags.
pub(crate) const EVENTS: [&str; 8] = [
    "inflation data",
    "election results",
    "cyberattack",
    "sanctions",
    "rate hike",
    "shortage",
    "trade war",
    "climate summit",
];

/// Outlets attributed to news items; research items use [`RESEARCH_SOURCE`].
pub(crate) const NEWS_OUTLETS: [&str; 5] =
    ["Bloomberg", "Reuters", "Financial Times", "WSJ", "CNBC"];

/// Source label attributed to every research item.
pub(crate) const RESEARCH_SOURCE: &str = "Proprietary Research";

/// Placeholder link attached to every item and evidence reference.
pub(crate) const ITEM_URL: &str = "#";

/// Constant third tag attached to every item.
pub(crate) const GLOBAL_TAG: &str = "#Global";

/// Fixed evidence references attached to every sector score.
pub(crate) const EVIDENCE_SOURCES: [&str; 3] =
    ["Bloomberg Terminal", "Reuters Wire", "Internal Analysis"];

/// Fixed channel list attached to every rumor.
pub(crate) const RUMOR_SOURCES: [&str; 3] =
    ["Encrypted Channels", "Market Chatter", "Anonymous Tips"];
