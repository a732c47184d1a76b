//! Ordered, human readable advice for a scored build.

mod templates;

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::StorageInterface;
use super::classifier::BuildArchetype;
use super::metrics::BuildMetrics;
use super::questionnaire::UseCase;
use super::synergy::{Grade, SynergyScore, SLOW_MEMORY_MHZ};

const TECHNICAL_DEBT_LOAD: f64 = 0.80;
const STRONG_VALUE_RATIO: f64 = 6.0;
const FAIR_VALUE_RATIO: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    StorageWarning,
    TechnicalDebt,
    Bottleneck,
    Reallocation,
    MemorySpeed,
    Value,
    MarketTiming,
    Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckFlags {
    pub cpu_bound: bool,
    pub gpu_bound: bool,
}

impl BottleneckFlags {
    pub fn from_metrics(metrics: &BuildMetrics) -> Self {
        Self {
            cpu_bound: metrics.is_cpu_bound(),
            gpu_bound: metrics.is_gpu_bound(),
        }
    }
}

/// Facts about the recommendation that are not part of the metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryContext {
    pub total_price: Option<f64>,
    pub use_case: Option<UseCase>,
    pub storage_interface: StorageInterface,
    pub bottlenecks: BottleneckFlags,
    pub today: NaiveDate,
}

impl AdvisoryContext {
    pub fn from_metrics(metrics: &BuildMetrics, today: NaiveDate) -> Self {
        Self {
            total_price: None,
            use_case: None,
            storage_interface: metrics.storage_interface,
            bottlenecks: BottleneckFlags::from_metrics(metrics),
            today,
        }
    }

    pub fn with_total_price(mut self, total_price: f64) -> Self {
        self.total_price = Some(total_price);
        self
    }

    pub fn with_use_case(mut self, use_case: UseCase) -> Self {
        self.use_case = Some(use_case);
        self
    }
}

/// Builds the advisory list. Which advisories appear, and in what order, depends only
/// on the inputs; the random source only chooses between equivalent wordings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryComposer;

impl AdvisoryComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose<R: Rng + ?Sized>(
        &self,
        synergy: &SynergyScore,
        grade: Grade,
        metrics: &BuildMetrics,
        context: &AdvisoryContext,
        rng: &mut R,
    ) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        let load = format!("{:.0}", metrics.estimated_psu_load_fraction * 100.0);
        let cores = metrics.cores.to_string();
        let vram = metrics.vram_gb.to_string();

        if context.storage_interface == StorageInterface::Sata {
            advisories.push(Advisory {
                kind: AdvisoryKind::StorageWarning,
                message: fill(
                    pick(templates::STORAGE_WARNING, rng),
                    &[("interface", context.storage_interface.label())],
                ),
            });
        }
        if metrics.estimated_psu_load_fraction > TECHNICAL_DEBT_LOAD {
            advisories.push(Advisory {
                kind: AdvisoryKind::TechnicalDebt,
                message: fill(pick(templates::TECHNICAL_DEBT, rng), &[("load", load.as_str())]),
            });
        }

        let bottleneck_fields = [("cores", cores.as_str()), ("vram", vram.as_str())];
        if context.bottlenecks.cpu_bound {
            advisories.push(Advisory {
                kind: AdvisoryKind::Bottleneck,
                message: fill(pick(templates::CPU_BOUND, rng), &bottleneck_fields),
            });
        }
        if context.bottlenecks.gpu_bound {
            advisories.push(Advisory {
                kind: AdvisoryKind::Bottleneck,
                message: fill(pick(templates::GPU_BOUND, rng), &bottleneck_fields),
            });
        }

        if let Some(pool) = templates::reallocation(grade) {
            advisories.push(Advisory {
                kind: AdvisoryKind::Reallocation,
                message: pick(pool, rng).to_string(),
            });
        }

        if metrics.ram_speed_mhz < SLOW_MEMORY_MHZ {
            let speed = metrics.ram_speed_mhz.to_string();
            advisories.push(Advisory {
                kind: AdvisoryKind::MemorySpeed,
                message: fill(pick(templates::MEMORY_SPEED, rng), &[("speed", speed.as_str())]),
            });
        }

        if let Some(price) = context.total_price.filter(|price| *price > 0.0) {
            let ratio = f64::from(synergy.score) / (price / 100.0);
            let pool = if ratio >= STRONG_VALUE_RATIO {
                templates::VALUE_STRONG
            } else if ratio >= FAIR_VALUE_RATIO {
                templates::VALUE_FAIR
            } else {
                templates::VALUE_PREMIUM
            };
            let price_text = format!("${price:.0}");
            let ratio_text = format!("{ratio:.1}");
            let purpose = context.use_case.map_or("everyday", UseCase::label);
            advisories.push(Advisory {
                kind: AdvisoryKind::Value,
                message: fill(
                    pick(pool, rng),
                    &[
                        ("price", price_text.as_str()),
                        ("ratio", ratio_text.as_str()),
                        ("purpose", purpose),
                    ],
                ),
            });
        }

        advisories.push(Advisory {
            kind: AdvisoryKind::MarketTiming,
            message: pick(templates::market_timing(context.today.month()), rng).to_string(),
        });

        if let Some(pool) = templates::confidence(grade) {
            advisories.push(Advisory {
                kind: AdvisoryKind::Confidence,
                message: pick(pool, rng).to_string(),
            });
        }

        advisories
    }

    /// One-paragraph narrative for the grade.
    pub fn feedback<R: Rng + ?Sized>(
        &self,
        grade: Grade,
        archetype: BuildArchetype,
        score: u8,
        rng: &mut R,
    ) -> String {
        let score = score.to_string();
        fill(
            pick(templates::feedback(grade), rng),
            &[("score", score.as_str()), ("profile", archetype.label())],
        )
    }
}

fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn fill(template: &str, fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
