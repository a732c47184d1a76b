use serde::{Deserialize, Serialize};

use super::catalog::{ComponentCategory, ComponentSpec};

/// Concrete component selection for one recommendation.
///
/// Single-instance categories are plain fields, so a build can never hold two CPUs.
/// Changes produce a new value (see [`CandidateBuild::with_psu`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateBuild {
    pub case: ComponentSpec,
    pub motherboard: ComponentSpec,
    pub cpu: ComponentSpec,
    pub gpu: ComponentSpec,
    pub psu: ComponentSpec,
    pub cooler: ComponentSpec,
    pub memory: Vec<ComponentSpec>,
    pub storage: Vec<ComponentSpec>,
    pub fans: Vec<ComponentSpec>,
}

impl CandidateBuild {
    /// Every selected part, PSU included.
    pub fn components(&self) -> impl Iterator<Item = &ComponentSpec> {
        [
            &self.case,
            &self.motherboard,
            &self.cpu,
            &self.gpu,
            &self.psu,
            &self.cooler,
        ]
        .into_iter()
        .chain(self.memory.iter())
        .chain(self.storage.iter())
        .chain(self.fans.iter())
    }

    pub fn total_price(&self) -> f64 {
        self.components().map(|component| component.price).sum()
    }

    /// Summed draw of everything the PSU has to feed, saturating at `u32::MAX`.
    pub fn power_draw_watts(&self) -> u32 {
        self.components()
            .filter(|component| component.category != ComponentCategory::Psu)
            .fold(0u32, |total, component| {
                total.saturating_add(component.power_draw_watts)
            })
    }

    pub fn psu_wattage(&self) -> u32 {
        self.psu.traits.wattage.unwrap_or(0)
    }

    pub fn with_psu(&self, psu: ComponentSpec) -> Self {
        Self {
            psu,
            ..self.clone()
        }
    }

    pub fn parts_summary(&self) -> PartsSummary {
        PartsSummary {
            cpu: self.cpu.display_name(),
            gpu: self.gpu.display_name(),
            memory: describe_list(&self.memory),
            storage: describe_list(&self.storage),
            cooling: self.cooler.display_name(),
            psu: self.psu.display_name(),
            case: self.case.display_name(),
            motherboard: self.motherboard.display_name(),
            case_fans: if self.fans.is_empty() {
                None
            } else {
                Some(describe_list(&self.fans))
            },
        }
    }
}

/// Human readable part list handed to display and checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsSummary {
    pub cpu: String,
    pub gpu: String,
    pub memory: String,
    pub storage: String,
    pub cooling: String,
    pub psu: String,
    pub case: String,
    pub motherboard: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_fans: Option<String>,
}

/// "2x Arctic P12 PWM" for repeated parts, "A + B" for mixed ones.
fn describe_list(components: &[ComponentSpec]) -> String {
    let mut groups: Vec<(&ComponentSpec, usize)> = Vec::new();
    for component in components {
        match groups.iter_mut().find(|(seen, _)| seen.id == component.id) {
            Some((_, count)) => *count += 1,
            None => groups.push((component, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(component, count)| {
            if count == 1 {
                component.display_name()
            } else {
                format!("{count}x {}", component.display_name())
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
