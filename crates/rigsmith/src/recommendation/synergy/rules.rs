use serde::{Deserialize, Serialize};

use super::super::catalog::{CoolingTier, StorageInterface};
use super::super::metrics::BuildMetrics;
use super::config::SynergyWeights;

const PSU_LOAD_WINDOW: (f64, f64) = (0.35, 0.80);
const PSU_SWEET_SPOT: (f64, f64) = (0.45, 0.70);
const PSU_OVERLOAD: f64 = 1.0;
pub(crate) const SLOW_MEMORY_MHZ: u32 = 3200;
const RAM_PER_CORE_GB: u32 = 8;
const EXCESSIVE_RAM_FLOOR_GB: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyRule {
    GpuCpuImbalance,
    RamBelowVramThreshold,
    PsuLoadOutsideWindow,
    PsuOverloaded,
    SataWithHighVram,
    MissingCooling,
    InsufficientCooling,
    ExcessiveRamForCores,
    SlowMemory,
    BalancedFlagship,
    PsuSweetSpot,
}

impl SynergyRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GpuCpuImbalance => "gpu_cpu_imbalance",
            Self::RamBelowVramThreshold => "ram_below_vram_threshold",
            Self::PsuLoadOutsideWindow => "psu_load_outside_window",
            Self::PsuOverloaded => "psu_overloaded",
            Self::SataWithHighVram => "sata_with_high_vram",
            Self::MissingCooling => "missing_cooling",
            Self::InsufficientCooling => "insufficient_cooling",
            Self::ExcessiveRamForCores => "excessive_ram_for_cores",
            Self::SlowMemory => "slow_memory",
            Self::BalancedFlagship => "balanced_flagship",
            Self::PsuSweetSpot => "psu_sweet_spot",
        }
    }

    pub const fn is_bonus(self) -> bool {
        matches!(self, Self::BalancedFlagship | Self::PsuSweetSpot)
    }
}

/// One fired rule with its signed point contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredRule {
    pub rule: SynergyRule,
    pub points: i32,
    pub detail: String,
}

/// RAM a GPU of this size should be paired with.
pub(crate) fn ram_floor_for_vram(vram_gb: u32) -> u32 {
    if vram_gb >= 16 {
        32
    } else if vram_gb >= 8 {
        16
    } else {
        8
    }
}

pub(crate) fn evaluate(metrics: &BuildMetrics, weights: &SynergyWeights) -> Vec<TriggeredRule> {
    let mut triggered = Vec::new();
    let mut fire = |rule: SynergyRule, points: i32, detail: String| {
        triggered.push(TriggeredRule {
            rule,
            points,
            detail,
        });
    };

    let BuildMetrics {
        cores,
        vram_gb,
        ram_capacity_gb: ram,
        ram_speed_mhz,
        estimated_psu_load_fraction: load,
        cooling_tier,
        storage_interface,
    } = *metrics;

    if vram_gb >= 12 && cores < 8 {
        fire(
            SynergyRule::GpuCpuImbalance,
            -weights.gpu_cpu_imbalance,
            format!("{vram_gb} GB GPU paired with a {cores}-core CPU"),
        );
    }

    let ram_floor = ram_floor_for_vram(vram_gb);
    if ram < ram_floor {
        fire(
            SynergyRule::RamBelowVramThreshold,
            -weights.ram_below_vram_threshold,
            format!("{ram} GB RAM below the {ram_floor} GB a {vram_gb} GB GPU wants"),
        );
    }

    if load < PSU_LOAD_WINDOW.0 || load > PSU_LOAD_WINDOW.1 {
        fire(
            SynergyRule::PsuLoadOutsideWindow,
            -weights.psu_load_outside_window,
            format!(
                "PSU load {:.0}% outside the {:.0}-{:.0}% efficiency window",
                load * 100.0,
                PSU_LOAD_WINDOW.0 * 100.0,
                PSU_LOAD_WINDOW.1 * 100.0
            ),
        );
    }

    if load > PSU_OVERLOAD {
        fire(
            SynergyRule::PsuOverloaded,
            -weights.psu_overloaded,
            format!("estimated draw is {:.0}% of PSU capacity", load * 100.0),
        );
    }

    if storage_interface == StorageInterface::Sata && vram_gb >= 12 {
        fire(
            SynergyRule::SataWithHighVram,
            -weights.sata_with_high_vram,
            format!("SATA storage feeding a {vram_gb} GB GPU"),
        );
    }

    if cooling_tier == CoolingTier::None && cores >= 6 {
        fire(
            SynergyRule::MissingCooling,
            -weights.missing_cooling,
            format!("no CPU cooler for a {cores}-core CPU"),
        );
    }

    if cores >= 12 && cooling_tier < CoolingTier::Air {
        fire(
            SynergyRule::InsufficientCooling,
            -weights.insufficient_cooling,
            format!("{} cooling on a {cores}-core CPU", cooling_tier.label()),
        );
    }

    if ram > cores * RAM_PER_CORE_GB && ram >= EXCESSIVE_RAM_FLOOR_GB {
        fire(
            SynergyRule::ExcessiveRamForCores,
            -weights.excessive_ram_for_cores,
            format!("{ram} GB RAM exceeds what {cores} cores can use"),
        );
    }

    if ram_speed_mhz < SLOW_MEMORY_MHZ {
        fire(
            SynergyRule::SlowMemory,
            -weights.slow_memory,
            format!("memory runs at {ram_speed_mhz} MHz"),
        );
    }

    if vram_gb >= 16 && cores >= 12 && ram >= 32 {
        fire(
            SynergyRule::BalancedFlagship,
            weights.balanced_flagship,
            format!("{vram_gb} GB GPU, {cores} cores and {ram} GB RAM are evenly matched"),
        );
    }

    if (PSU_SWEET_SPOT.0..=PSU_SWEET_SPOT.1).contains(&load) {
        fire(
            SynergyRule::PsuSweetSpot,
            weights.psu_sweet_spot,
            format!("PSU load {:.0}% sits in the efficiency sweet spot", load * 100.0),
        );
    }

    triggered
}
