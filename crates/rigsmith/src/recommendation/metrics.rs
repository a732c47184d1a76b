use serde::Serialize;

use super::build::CandidateBuild;
use super::catalog::{CoolingTier, StorageInterface};

/// Numeric summary of a build consumed by the scorer, classifier and advisories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetrics {
    pub cores: u32,
    pub vram_gb: u32,
    pub ram_capacity_gb: u32,
    pub ram_speed_mhz: u32,
    pub estimated_psu_load_fraction: f64,
    pub cooling_tier: CoolingTier,
    pub storage_interface: StorageInterface,
}

impl BuildMetrics {
    pub fn from_build(build: &CandidateBuild) -> Self {
        let ram_capacity_gb = build
            .memory
            .iter()
            .filter_map(|kit| kit.traits.capacity_gb)
            .sum();
        // mixed kits run at the slowest kit's speed
        let ram_speed_mhz = build
            .memory
            .iter()
            .filter_map(|kit| kit.traits.speed_mhz)
            .min()
            .unwrap_or(0);

        let wattage = build.psu_wattage().max(1);
        let estimated_psu_load_fraction = f64::from(build.power_draw_watts()) / f64::from(wattage);

        let storage_interface = if build
            .storage
            .iter()
            .any(|drive| drive.traits.interface == Some(StorageInterface::Nvme))
        {
            StorageInterface::Nvme
        } else {
            StorageInterface::Sata
        };

        Self {
            cores: build.cpu.traits.cores.unwrap_or(0),
            vram_gb: build.gpu.traits.vram_gb.unwrap_or(0),
            ram_capacity_gb,
            ram_speed_mhz,
            estimated_psu_load_fraction,
            cooling_tier: build.cooler.traits.cooling_tier.unwrap_or(CoolingTier::None),
            storage_interface,
        }
    }

    /// Strong GPU held back by a low core count.
    pub fn is_cpu_bound(&self) -> bool {
        self.vram_gb >= 12 && self.cores < 8
    }

    /// Many cores paired with a weak GPU.
    pub fn is_gpu_bound(&self) -> bool {
        self.cores >= 12 && self.vram_gb < 8
    }
}
