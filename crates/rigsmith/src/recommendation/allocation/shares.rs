use serde::Serialize;
use std::collections::BTreeMap;

use super::super::catalog::ComponentCategory;
use super::super::questionnaire::{
    Aesthetics, BuildProfile, PerformanceAmbition, PriorityComponent, UseCase,
};

/// Shares are expressed in basis points of the budget.
pub const BASIS_POINTS: u32 = 10_000;

const PRIORITY_BOOST: u32 = 600;
const PRIORITY_DONORS: [(ComponentCategory, u32); 4] = [
    (ComponentCategory::Case, 500),
    (ComponentCategory::Fan, 100),
    (ComponentCategory::Cooler, 400),
    (ComponentCategory::Motherboard, 800),
];

const MAXIMUM_GPU_BOOST: u32 = 400;
const MAXIMUM_CPU_BOOST: u32 = 200;
const MAXIMUM_DONORS: [(ComponentCategory, u32); 4] = [
    (ComponentCategory::Case, 400),
    (ComponentCategory::Fan, 0),
    (ComponentCategory::Storage, 500),
    (ComponentCategory::Cooler, 300),
];

const RGB_STORAGE_FLOOR: u32 = 500;

/// Per-category budget split for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareTable {
    shares: BTreeMap<ComponentCategory, u32>,
}

impl ShareTable {
    pub fn base() -> Self {
        let shares = [
            (ComponentCategory::Gpu, 3000),
            (ComponentCategory::Cpu, 2000),
            (ComponentCategory::Motherboard, 1000),
            (ComponentCategory::Ram, 800),
            (ComponentCategory::Storage, 800),
            (ComponentCategory::Psu, 800),
            (ComponentCategory::Cooler, 500),
            (ComponentCategory::Case, 800),
            (ComponentCategory::Fan, 300),
        ]
        .into_iter()
        .collect();

        Self { shares }
    }

    /// Base table with the purpose, aesthetics, priority and ambition shifts applied in that order.
    pub fn for_profile(profile: &BuildProfile) -> Self {
        let mut table = Self::base();

        match profile.purpose() {
            UseCase::Workstation => {
                table.shift(ComponentCategory::Cpu, 300, &[(ComponentCategory::Gpu, 0)]);
                table.shift(ComponentCategory::Ram, 200, &[(ComponentCategory::Gpu, 0)]);
            }
            UseCase::Creative => {
                table.shift(ComponentCategory::Ram, 200, &[(ComponentCategory::Gpu, 0)]);
                table.shift(ComponentCategory::Storage, 100, &[(ComponentCategory::Gpu, 0)]);
            }
            UseCase::Streaming => {
                table.shift(ComponentCategory::Cpu, 300, &[(ComponentCategory::Gpu, 0)]);
            }
            UseCase::Gaming | UseCase::General => {}
        }

        match profile.aesthetics() {
            Aesthetics::Minimal => {
                let fan_share = table.share(ComponentCategory::Fan);
                table.shift(
                    ComponentCategory::Gpu,
                    fan_share,
                    &[(ComponentCategory::Fan, 0)],
                );
            }
            Aesthetics::RgbMaximal => {
                let donors = [(ComponentCategory::Storage, RGB_STORAGE_FLOOR)];
                table.shift(ComponentCategory::Case, 100, &donors);
                table.shift(ComponentCategory::Fan, 100, &donors);
            }
            Aesthetics::RgbModerate => {}
        }

        if let Some(target) = priority_category(profile.priority_component()) {
            table.shift(target, PRIORITY_BOOST, &PRIORITY_DONORS);
        }

        if profile.performance_ambition() == PerformanceAmbition::Maximum {
            table.shift(ComponentCategory::Gpu, MAXIMUM_GPU_BOOST, &MAXIMUM_DONORS);
            table.shift(ComponentCategory::Cpu, MAXIMUM_CPU_BOOST, &MAXIMUM_DONORS);
        }

        table
    }

    pub fn share(&self, category: ComponentCategory) -> u32 {
        self.shares.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.shares.values().sum()
    }

    /// Budget slice for a category.
    pub fn allocation(&self, category: ComponentCategory, budget: f64) -> f64 {
        budget * f64::from(self.share(category)) / f64::from(BASIS_POINTS)
    }

    /// Moves up to `amount` into `target`, draining donors in order without taking
    /// any below its floor. Returns what was actually moved.
    fn shift(
        &mut self,
        target: ComponentCategory,
        amount: u32,
        donors: &[(ComponentCategory, u32)],
    ) -> u32 {
        let mut remaining = amount;
        for &(donor, floor) in donors {
            if remaining == 0 {
                break;
            }
            if donor == target {
                continue;
            }
            let available = self.share(donor).saturating_sub(floor);
            let taken = available.min(remaining);
            if taken == 0 {
                continue;
            }
            *self.shares.entry(donor).or_insert(0) -= taken;
            remaining -= taken;
        }

        let moved = amount - remaining;
        *self.shares.entry(target).or_insert(0) += moved;
        moved
    }
}

fn priority_category(priority: PriorityComponent) -> Option<ComponentCategory> {
    match priority {
        PriorityComponent::Gpu => Some(ComponentCategory::Gpu),
        PriorityComponent::Cpu => Some(ComponentCategory::Cpu),
        PriorityComponent::Memory => Some(ComponentCategory::Ram),
        PriorityComponent::Storage => Some(ComponentCategory::Storage),
        PriorityComponent::Balanced => None,
    }
}
