use serde::{Deserialize, Serialize};

use super::metrics::BuildMetrics;

/// Descriptive archetype attached to a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildArchetype {
    FlagshipPowerhouse,
    WorkstationBeast,
    EnthusiastGamingRig,
    GpuHeavyBuild,
    CreatorWorkstation,
    HighRefreshGamer,
    CpuCentricBuild,
    BalancedMainstream,
    BudgetStarter,
    VersatileAllRounder,
}

impl BuildArchetype {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FlagshipPowerhouse => "Flagship Powerhouse",
            Self::WorkstationBeast => "Workstation Beast",
            Self::EnthusiastGamingRig => "Enthusiast Gaming Rig",
            Self::GpuHeavyBuild => "GPU-Heavy Build",
            Self::CreatorWorkstation => "Creator Workstation",
            Self::HighRefreshGamer => "High-Refresh Gamer",
            Self::CpuCentricBuild => "CPU-Centric Build",
            Self::BalancedMainstream => "Balanced Mainstream",
            Self::BudgetStarter => "Budget Starter",
            Self::VersatileAllRounder => "Versatile All-Rounder",
        }
    }
}

type Predicate = fn(&BuildMetrics) -> bool;

// Order matters: the first matching predicate names the build.
const ARCHETYPES: [(BuildArchetype, Predicate); 9] = [
    (BuildArchetype::FlagshipPowerhouse, |m| {
        m.vram_gb >= 16 && m.cores >= 16 && m.ram_capacity_gb >= 64
    }),
    (BuildArchetype::WorkstationBeast, |m| {
        m.cores >= 16 && m.ram_capacity_gb >= 64
    }),
    (BuildArchetype::EnthusiastGamingRig, |m| {
        m.vram_gb >= 16 && m.cores >= 8 && m.ram_capacity_gb >= 32
    }),
    (BuildArchetype::GpuHeavyBuild, |m| m.vram_gb >= 12 && m.cores < 8),
    (BuildArchetype::CreatorWorkstation, |m| {
        m.cores >= 12 && m.ram_capacity_gb >= 32
    }),
    (BuildArchetype::HighRefreshGamer, |m| m.vram_gb >= 12 && m.cores >= 8),
    (BuildArchetype::CpuCentricBuild, |m| m.cores >= 12 && m.vram_gb < 8),
    (BuildArchetype::BalancedMainstream, |m| {
        m.vram_gb >= 8 && m.cores >= 6 && m.ram_capacity_gb >= 16
    }),
    (BuildArchetype::BudgetStarter, |m| m.vram_gb < 8 && m.cores <= 6),
];

pub fn classify(metrics: &BuildMetrics) -> BuildArchetype {
    ARCHETYPES
        .iter()
        .find(|(_, matches)| matches(metrics))
        .map(|(archetype, _)| *archetype)
        .unwrap_or(BuildArchetype::VersatileAllRounder)
}
