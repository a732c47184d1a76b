use serde::{Deserialize, Serialize};

/// Point values for every synergy rule. Deductions are stored as positive magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyWeights {
    pub gpu_cpu_imbalance: i32,
    pub ram_below_vram_threshold: i32,
    pub psu_load_outside_window: i32,
    pub psu_overloaded: i32,
    pub sata_with_high_vram: i32,
    pub missing_cooling: i32,
    pub insufficient_cooling: i32,
    pub excessive_ram_for_cores: i32,
    pub slow_memory: i32,
    pub balanced_flagship: i32,
    pub psu_sweet_spot: i32,
}

impl Default for SynergyWeights {
    fn default() -> Self {
        Self {
            gpu_cpu_imbalance: 20,
            ram_below_vram_threshold: 15,
            psu_load_outside_window: 15,
            psu_overloaded: 20,
            sata_with_high_vram: 10,
            missing_cooling: 20,
            insufficient_cooling: 12,
            excessive_ram_for_cores: 10,
            slow_memory: 5,
            balanced_flagship: 5,
            psu_sweet_spot: 3,
        }
    }
}
