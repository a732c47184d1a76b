//! Budget split and part selection.

mod shares;

pub use shares::{ShareTable, BASIS_POINTS};

use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use super::build::CandidateBuild;
use super::catalog::{CatalogError, CatalogRepository, ComponentCategory, ComponentSpec};
use super::questionnaire::{BuildProfile, Timeline};
use crate::config::EngineConfig;

/// Fulfilment details attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfilment {
    pub surcharge: f64,
    pub priority_flag: bool,
}

/// Result of one allocation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub build: CandidateBuild,
    pub total_price: f64,
    pub notes: Vec<String>,
    pub fulfilment: Fulfilment,
    pub shares: ShareTable,
}

#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("budget {budget:.2} is below the minimum supported build budget of {minimum:.2}")]
    BudgetTooLow { budget: f64, minimum: f64 },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Tunable allocator thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationPolicy {
    pub minimum_budget: f64,
    pub rush_surcharge: f64,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for AllocationPolicy {
    fn from(config: &EngineConfig) -> Self {
        Self {
            minimum_budget: config.minimum_budget,
            rush_surcharge: config.rush_surcharge,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetAllocator {
    policy: AllocationPolicy,
}

impl BudgetAllocator {
    pub fn new(policy: AllocationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    pub fn allocate<C: CatalogRepository + ?Sized>(
        &self,
        profile: &BuildProfile,
        catalog: &C,
    ) -> Result<Allocation, AllocationError> {
        let budget = profile.budget();
        if budget < self.policy.minimum_budget {
            return Err(AllocationError::BudgetTooLow {
                budget,
                minimum: self.policy.minimum_budget,
            });
        }

        let shares = ShareTable::for_profile(profile);
        let mut notes = Vec::new();
        let slice = |category| shares.allocation(category, budget);

        let cpu = select(
            ComponentCategory::Cpu,
            slice(ComponentCategory::Cpu),
            required(catalog, ComponentCategory::Cpu)?.iter().collect(),
            &mut notes,
        )?;

        let boards = restrict(
            required(catalog, ComponentCategory::Motherboard)?,
            |board| shares_any(&board.tags.sockets, &cpu.tags.sockets),
            || {
                format!(
                    "No motherboard supports the {} socket; choosing from the full range",
                    cpu.tags.sockets.join("/")
                )
            },
            &mut notes,
        );
        let motherboard = select(
            ComponentCategory::Motherboard,
            slice(ComponentCategory::Motherboard),
            boards,
            &mut notes,
        )?;

        let kits = restrict(
            required(catalog, ComponentCategory::Ram)?,
            |kit| shares_any(&kit.tags.memory_types, &motherboard.tags.memory_types),
            || {
                format!(
                    "No memory kit matches the {} slots on {}; choosing from the full range",
                    motherboard.tags.memory_types.join("/"),
                    motherboard.display_name()
                )
            },
            &mut notes,
        );
        let memory = select(
            ComponentCategory::Ram,
            slice(ComponentCategory::Ram),
            kits,
            &mut notes,
        )?;

        let gpu = select(
            ComponentCategory::Gpu,
            slice(ComponentCategory::Gpu),
            required(catalog, ComponentCategory::Gpu)?.iter().collect(),
            &mut notes,
        )?;
        let storage = select(
            ComponentCategory::Storage,
            slice(ComponentCategory::Storage),
            required(catalog, ComponentCategory::Storage)?.iter().collect(),
            &mut notes,
        )?;
        let cooler = select(
            ComponentCategory::Cooler,
            slice(ComponentCategory::Cooler),
            required(catalog, ComponentCategory::Cooler)?.iter().collect(),
            &mut notes,
        )?;
        let case = select(
            ComponentCategory::Case,
            slice(ComponentCategory::Case),
            required(catalog, ComponentCategory::Case)?.iter().collect(),
            &mut notes,
        )?;
        let psu = select(
            ComponentCategory::Psu,
            slice(ComponentCategory::Psu),
            required(catalog, ComponentCategory::Psu)?.iter().collect(),
            &mut notes,
        )?;

        let fan_count = profile.aesthetics().fan_count();
        let mut fans = Vec::new();
        if fan_count > 0 {
            let available = catalog.components(ComponentCategory::Fan);
            if available.is_empty() {
                notes.push(format!(
                    "No case fans are stocked; the {fan_count} requested fans were left out"
                ));
            } else {
                let per_fan = slice(ComponentCategory::Fan) / fan_count as f64;
                let fan = select(
                    ComponentCategory::Fan,
                    per_fan,
                    available.iter().collect(),
                    &mut notes,
                )?;
                fans = vec![fan; fan_count];
            }
        }

        let build = CandidateBuild {
            case,
            motherboard,
            cpu,
            gpu,
            psu,
            cooler,
            memory: vec![memory],
            storage: vec![storage],
            fans,
        };

        let total_price = build.total_price();
        notes.extend(over_budget_note(total_price, budget));

        let fulfilment = match profile.timeline() {
            Timeline::Rush => Fulfilment {
                surcharge: self.policy.rush_surcharge,
                priority_flag: true,
            },
            Timeline::Flexible | Timeline::Standard => Fulfilment {
                surcharge: 0.0,
                priority_flag: false,
            },
        };

        debug!(
            budget,
            total_price,
            notes = notes.len(),
            "allocation complete"
        );

        Ok(Allocation {
            build,
            total_price,
            notes,
            fulfilment,
            shares,
        })
    }
}

/// Note explaining how far `total_price` overshoots `budget`, if it does.
pub fn over_budget_note(total_price: f64, budget: f64) -> Option<String> {
    (total_price > budget).then(|| {
        format!(
            "Selected parts total {total_price:.2}, which is {:.2} over the {budget:.2} budget",
            total_price - budget
        )
    })
}

/// Cheapest PSU with at least `minimum_wattage`, else the largest stocked unit.
pub fn psu_covering<C: CatalogRepository + ?Sized>(
    catalog: &C,
    minimum_wattage: f64,
) -> Option<&ComponentSpec> {
    let units = catalog.components(ComponentCategory::Psu);
    let wattage = |unit: &ComponentSpec| f64::from(unit.traits.wattage.unwrap_or(0));

    units
        .iter()
        .filter(|unit| wattage(*unit) >= minimum_wattage)
        .min_by(|a, b| cheapest_first(a, b))
        .or_else(|| {
            units.iter().max_by(|a, b| {
                a.traits
                    .wattage
                    .cmp(&b.traits.wattage)
                    .then_with(|| b.price.total_cmp(&a.price))
                    .then_with(|| b.id.cmp(&a.id))
            })
        })
}

fn required<C: CatalogRepository + ?Sized>(
    catalog: &C,
    category: ComponentCategory,
) -> Result<&[ComponentSpec], CatalogError> {
    let components = catalog.components(category);
    if components.is_empty() {
        return Err(CatalogError::MissingCategory(category));
    }
    Ok(components)
}

/// Narrows `components` to the compatible subset, falling back to all of them with a note.
fn restrict<'a>(
    components: &'a [ComponentSpec],
    compatible: impl Fn(&ComponentSpec) -> bool,
    fallback_note: impl FnOnce() -> String,
    notes: &mut Vec<String>,
) -> Vec<&'a ComponentSpec> {
    let narrowed: Vec<&ComponentSpec> = components
        .iter()
        .filter(|component| compatible(*component))
        .collect();
    if narrowed.is_empty() {
        notes.push(fallback_note());
        components.iter().collect()
    } else {
        narrowed
    }
}

fn shares_any(left: &[String], right: &[String]) -> bool {
    left.iter()
        .any(|value| right.iter().any(|other| other.eq_ignore_ascii_case(value)))
}

/// Highest price within `allocation`; the cheapest entry when nothing fits.
fn select(
    category: ComponentCategory,
    allocation: f64,
    candidates: Vec<&ComponentSpec>,
    notes: &mut Vec<String>,
) -> Result<ComponentSpec, CatalogError> {
    let within = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.price <= allocation)
        .max_by(|a, b| {
            a.price
                .total_cmp(&b.price)
                .then_with(|| a.performance.cmp(&b.performance))
                .then_with(|| b.id.cmp(&a.id))
        });

    let chosen = match within {
        Some(component) => component,
        None => {
            let cheapest = candidates
                .iter()
                .copied()
                .min_by(|a, b| cheapest_first(a, b))
                .ok_or(CatalogError::MissingCategory(category))?;
            notes.push(format!(
                "No {} fits the {allocation:.2} allocation; using the cheapest option {} at {:.2}",
                category.label(),
                cheapest.display_name(),
                cheapest.price
            ));
            cheapest
        }
    };

    debug!(
        category = category.label(),
        allocation,
        selected = %chosen.id,
        price = chosen.price,
        "component selected"
    );

    Ok(chosen.clone())
}

fn cheapest_first(a: &ComponentSpec, b: &ComponentSpec) -> Ordering {
    a.price
        .total_cmp(&b.price)
        .then_with(|| b.performance.cmp(&a.performance))
        .then_with(|| a.id.cmp(&b.id))
}
