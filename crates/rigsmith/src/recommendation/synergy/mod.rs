//! Rule based synergy scoring and letter grades.

mod config;
mod grade;
mod rules;

pub use config::SynergyWeights;
pub use grade::Grade;
pub use rules::{SynergyRule, TriggeredRule};

pub(crate) use rules::SLOW_MEMORY_MHZ;

use serde::{Deserialize, Serialize};

use super::metrics::BuildMetrics;

const STARTING_SCORE: i32 = 100;

/// Internal invariant breaches. These indicate a bug, never bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SynergyError {
    #[error("synergy score {0} is outside 0-100")]
    ScoreOutOfRange(i32),
    #[error("no grade band covers score {0}")]
    BandGap(i32),
}

/// Clamped score plus the audit trail of every rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyScore {
    pub score: u8,
    pub triggered: Vec<TriggeredRule>,
}

impl SynergyScore {
    pub fn grade(&self) -> Result<Grade, SynergyError> {
        Grade::from_score(i32::from(self.score))
    }

    pub fn fired(&self, rule: SynergyRule) -> bool {
        self.triggered.iter().any(|entry| entry.rule == rule)
    }
}

/// Stateless scorer applying the configured weights to build metrics.
#[derive(Debug, Clone, Default)]
pub struct SynergyScorer {
    weights: SynergyWeights,
}

impl SynergyScorer {
    pub fn new(weights: SynergyWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &SynergyWeights {
        &self.weights
    }

    pub fn score(&self, metrics: &BuildMetrics) -> SynergyScore {
        let triggered = rules::evaluate(metrics, &self.weights);
        let raw: i32 = STARTING_SCORE + triggered.iter().map(|entry| entry.points).sum::<i32>();
        let score = raw.clamp(0, 100) as u8;

        SynergyScore { score, triggered }
    }
}
