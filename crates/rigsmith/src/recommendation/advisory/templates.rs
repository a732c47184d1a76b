//! Wording pools. Placeholders in braces are filled by the composer.

use super::super::synergy::Grade;

pub(super) const STORAGE_WARNING: &[&str] = &[
    "Primary storage is {interface}. An NVMe drive cuts load times sharply and costs little more.",
    "This build boots from {interface}. Moving the OS and games to NVMe removes a noticeable bottleneck.",
];

pub(super) const TECHNICAL_DEBT: &[&str] = &[
    "The power supply runs at {load}% of capacity. Plan a PSU upgrade before adding any parts.",
    "At {load}% PSU load there is no room for future upgrades; a larger unit avoids replacing it later.",
];

pub(super) const CPU_BOUND: &[&str] = &[
    "The {vram} GB GPU will wait on the {cores}-core CPU in busy scenes. A CPU with 8+ cores unlocks it.",
    "Expect CPU-limited frame rates: {cores} cores cannot keep a {vram} GB GPU fed at high refresh rates.",
];

pub(super) const GPU_BOUND: &[&str] = &[
    "{cores} cores paired with a {vram} GB GPU leaves graphics as the limit. Shift budget toward the GPU.",
    "The GPU caps this build; a card with 8 GB or more VRAM would match the {cores}-core CPU.",
];

pub(super) const MEMORY_SPEED: &[&str] = &[
    "Memory runs at {speed} MHz. A 3200 MHz or faster kit is an inexpensive responsiveness boost.",
    "At {speed} MHz the RAM slows the CPU down; faster memory is one of the cheapest upgrades here.",
];

pub(super) const VALUE_STRONG: &[&str] = &[
    "Strong value: {ratio} synergy points per $100 at {price} for {purpose} use.",
    "At {price} this {purpose} build returns {ratio} synergy points per $100, well above typical.",
];

pub(super) const VALUE_FAIR: &[&str] = &[
    "Fair value: {ratio} synergy points per $100 at {price} for {purpose} use.",
    "At {price} this {purpose} build delivers {ratio} synergy points per $100, in line with the market.",
];

pub(super) const VALUE_PREMIUM: &[&str] = &[
    "Premium pricing: {ratio} synergy points per $100 at {price}. Rebalancing could stretch the budget.",
    "At {price} this {purpose} build returns only {ratio} synergy points per $100; part of the spend is not pulling its weight.",
];

pub(super) const MARKET_HOLIDAY: &[&str] = &[
    "Holiday sales are running. GPUs and SSDs see their deepest discounts of the year right now.",
    "Black Friday pricing is live; lock in the GPU and storage while discounts last.",
];

pub(super) const MARKET_NEW_YEAR: &[&str] = &[
    "New hardware launches cluster early in the year. If you can wait a few weeks, prices on current parts usually dip.",
    "Launch season is near; flexible buyers often save by waiting for the next generation announcements.",
];

pub(super) const MARKET_SPRING: &[&str] = &[
    "Spring pricing is historically stable, so there is little to gain by waiting.",
    "Prices tend to hold steady this time of year; buying now is as good as later.",
];

pub(super) const MARKET_SUMMER: &[&str] = &[
    "Mid-year sales events are common now; watch for storage and memory deals.",
    "Summer promotions often discount SSDs and RAM, so check for bundle deals before ordering.",
];

pub(super) const MARKET_BACK_TO_SCHOOL: &[&str] = &[
    "Back-to-school promotions are on; CPUs and motherboards are frequently bundled.",
    "Back-to-school season brings CPU and motherboard bundles worth checking.",
];

pub(super) const MARKET_PRE_HOLIDAY: &[&str] = &[
    "Holiday discounts start in a few weeks. If the timeline allows, waiting may lower the total.",
    "Early holiday deals are appearing; large discounts usually follow next month.",
];

const CONFIDENCE_A: &[&str] = &[
    "Every part pulls its weight. This is a build you can order with confidence.",
    "An exceptionally well matched build; nothing here is holding anything else back.",
];

const CONFIDENCE_B: &[&str] = &[
    "A well balanced build with only minor trade-offs. Safe to order as is.",
    "Solid choices throughout; the remaining trade-offs are small.",
];

const REALLOCATION_C: &[&str] = &[
    "Small tweak suggested: moving some budget from the case or cooling toward the weakest part would lift the score.",
    "A modest reallocation toward the flagged parts would push this build into the next grade.",
];

const REALLOCATION_D: &[&str] = &[
    "Rebalancing recommended: the flagged parts are holding the build back. Redirect budget toward them first.",
    "Consider trading down on the strongest part to fund the weakest one; the build is noticeably lopsided.",
];

const REALLOCATION_E: &[&str] = &[
    "Significant imbalance: rework the split between GPU, CPU and memory before ordering.",
    "Several parts are mismatched. Start again from the priority component and rebuild around it.",
];

const REALLOCATION_F: &[&str] = &[
    "This combination is not recommended. Resolve the flagged problems before spending anything.",
    "The parts work against each other. A different budget split is needed for a usable build.",
];

const FEEDBACK_A: &[&str] = &[
    "Outstanding synergy ({score}/100). This {profile} is tuned end to end.",
    "A top-tier {profile}: {score}/100 with no meaningful weak spots.",
];

const FEEDBACK_B: &[&str] = &[
    "Strong synergy ({score}/100). This {profile} balances its parts well.",
    "A capable {profile} scoring {score}/100, with a couple of small compromises.",
];

const FEEDBACK_C: &[&str] = &[
    "Decent synergy ({score}/100). This {profile} works, but a few parts are mismatched.",
    "A serviceable {profile} at {score}/100; some budget is in the wrong place.",
];

const FEEDBACK_D: &[&str] = &[
    "Below-average synergy ({score}/100). This {profile} has clear bottlenecks.",
    "This {profile} scores {score}/100; several parts hold each other back.",
];

const FEEDBACK_E: &[&str] = &[
    "Weak synergy ({score}/100). This {profile} needs rebalancing before it is worth buying.",
    "At {score}/100 this {profile} leaves a lot of performance on the table.",
];

const FEEDBACK_F: &[&str] = &[
    "Poor synergy ({score}/100). This {profile} has conflicts that should be fixed first.",
    "This {profile} scores only {score}/100; the parts do not work well together.",
];

/// Confidence boosters exist only for A and B builds.
pub(super) fn confidence(grade: Grade) -> Option<&'static [&'static str]> {
    match grade {
        Grade::A => Some(CONFIDENCE_A),
        Grade::B => Some(CONFIDENCE_B),
        Grade::C | Grade::D | Grade::E | Grade::F => None,
    }
}

/// Reallocation tips exist only for C grades and below.
pub(super) fn reallocation(grade: Grade) -> Option<&'static [&'static str]> {
    match grade {
        Grade::A | Grade::B => None,
        Grade::C => Some(REALLOCATION_C),
        Grade::D => Some(REALLOCATION_D),
        Grade::E => Some(REALLOCATION_E),
        Grade::F => Some(REALLOCATION_F),
    }
}

pub(super) fn feedback(grade: Grade) -> &'static [&'static str] {
    match grade {
        Grade::A => FEEDBACK_A,
        Grade::B => FEEDBACK_B,
        Grade::C => FEEDBACK_C,
        Grade::D => FEEDBACK_D,
        Grade::E => FEEDBACK_E,
        Grade::F => FEEDBACK_F,
    }
}

/// Pool for a calendar month (1-12).
pub(super) fn market_timing(month: u32) -> &'static [&'static str] {
    match month {
        11 => MARKET_HOLIDAY,
        12 | 1 => MARKET_NEW_YEAR,
        2..=5 => MARKET_SPRING,
        6 | 7 => MARKET_SUMMER,
        8 | 9 => MARKET_BACK_TO_SCHOOL,
        _ => MARKET_PRE_HOLIDAY,
    }
}
