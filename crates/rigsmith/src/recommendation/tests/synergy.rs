use super::common::*;

use crate::recommendation::catalog::{CoolingTier, StorageInterface};
use crate::recommendation::metrics::BuildMetrics;
use crate::recommendation::synergy::{Grade, SynergyRule, SynergyScorer, SynergyWeights};

fn rules_fired(metrics: &BuildMetrics) -> Vec<SynergyRule> {
    SynergyScorer::default()
        .score(metrics)
        .triggered
        .into_iter()
        .map(|entry| entry.rule)
        .collect()
}

#[test]
fn golden_metrics_score_b() {
    let metrics = BuildMetrics::from_build(&golden_build());
    assert_eq!(metrics.cores, 6);
    assert_eq!(metrics.vram_gb, 16);
    assert_eq!(metrics.ram_capacity_gb, 32);
    assert_eq!(metrics.storage_interface, StorageInterface::Nvme);

    let score = SynergyScorer::default().score(&metrics);
    assert_eq!(score.score, 83);
    assert_eq!(score.grade(), Ok(Grade::B));
    assert_eq!(
        rules_fired(&metrics),
        vec![SynergyRule::GpuCpuImbalance, SynergyRule::PsuSweetSpot]
    );
}

#[test]
fn deductions_fire_in_fixed_order() {
    let metrics = BuildMetrics {
        cores: 16,
        vram_gb: 4,
        ram_capacity_gb: 128,
        ram_speed_mhz: 2666,
        estimated_psu_load_fraction: 1.2,
        cooling_tier: CoolingTier::None,
        storage_interface: StorageInterface::Sata,
    };

    assert_eq!(
        rules_fired(&metrics),
        vec![
            SynergyRule::PsuLoadOutsideWindow,
            SynergyRule::PsuOverloaded,
            SynergyRule::MissingCooling,
            SynergyRule::InsufficientCooling,
            SynergyRule::SlowMemory,
        ]
    );
    // 100 - 15 - 20 - 20 - 12 - 5
    assert_eq!(SynergyScorer::default().score(&metrics).score, 28);
}

#[test]
fn score_is_clamped_to_zero() {
    let metrics = BuildMetrics {
        cores: 6,
        vram_gb: 24,
        ram_capacity_gb: 8,
        ram_speed_mhz: 2133,
        estimated_psu_load_fraction: 1.5,
        cooling_tier: CoolingTier::None,
        storage_interface: StorageInterface::Sata,
    };
    let score = SynergyScorer::default().score(&metrics);
    // raw: 100 - 20 - 15 - 15 - 20 - 10 - 20 - 5 = -5
    assert_eq!(score.score, 0);
    assert_eq!(score.grade(), Ok(Grade::F));
}

#[test]
fn flagship_bonus_caps_at_one_hundred() {
    let score = SynergyScorer::default().score(&metrics(16, 24, 64));
    assert!(score.fired(SynergyRule::BalancedFlagship));
    assert!(score.fired(SynergyRule::PsuSweetSpot));
    assert_eq!(score.score, 100);
}

#[test]
fn grade_boundaries_follow_custom_weights() {
    // cores 12 with stock cooling fires only insufficient_cooling
    let base = BuildMetrics {
        cooling_tier: CoolingTier::Stock,
        estimated_psu_load_fraction: 0.75,
        ..metrics(12, 12, 16)
    };

    let cases = [
        (70, 30, Grade::E),
        (71, 29, Grade::F),
        (55, 45, Grade::D),
        (56, 44, Grade::E),
        (40, 60, Grade::C),
        (41, 59, Grade::D),
        (25, 75, Grade::B),
        (26, 74, Grade::C),
        (10, 90, Grade::A),
        (11, 89, Grade::B),
    ];

    for (penalty, expected_score, expected_grade) in cases {
        let weights = SynergyWeights {
            insufficient_cooling: penalty,
            ..SynergyWeights::default()
        };
        let score = SynergyScorer::new(weights).score(&base);
        assert_eq!(score.score, expected_score, "penalty {penalty}");
        assert_eq!(score.grade(), Ok(expected_grade), "score {expected_score}");
    }
}

#[test]
fn more_ram_never_hurts_below_the_excess_threshold() {
    let capacities = [8, 16, 32, 48, 64, 96, 128];
    let scorer = SynergyScorer::default();
    let scored: Vec<(u32, u8, bool)> = capacities
        .iter()
        .map(|&ram| {
            let score = scorer.score(&metrics(8, 16, ram));
            (ram, score.score, score.fired(SynergyRule::ExcessiveRamForCores))
        })
        .collect();

    for pair in scored.windows(2) {
        let (low_ram, low_score, low_excess) = pair[0];
        let (high_ram, high_score, high_excess) = pair[1];
        if low_excess == high_excess {
            assert!(
                high_score >= low_score,
                "{high_ram} GB scored below {low_ram} GB"
            );
        }
    }

    // 8 cores: 64 GB is fine, 96 GB crosses cores x 8
    let at_64 = scorer.score(&metrics(8, 16, 64));
    let at_96 = scorer.score(&metrics(8, 16, 96));
    assert!(!at_64.fired(SynergyRule::ExcessiveRamForCores));
    assert!(at_96.fired(SynergyRule::ExcessiveRamForCores));
    assert!(at_96.score < at_64.score);
}

#[test]
fn vram_sets_the_ram_floor() {
    assert!(rules_fired(&metrics(8, 8, 8)).contains(&SynergyRule::RamBelowVramThreshold));
    assert!(!rules_fired(&metrics(8, 8, 16)).contains(&SynergyRule::RamBelowVramThreshold));
    assert!(rules_fired(&metrics(8, 16, 16)).contains(&SynergyRule::RamBelowVramThreshold));
    assert!(!rules_fired(&metrics(8, 4, 8)).contains(&SynergyRule::RamBelowVramThreshold));
}
