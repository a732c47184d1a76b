//! Read-only component catalog consumed by the allocator.

mod parser;
mod reference;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Case,
    Motherboard,
    Cpu,
    Gpu,
    Ram,
    Storage,
    Psu,
    Cooler,
    Fan,
}

impl ComponentCategory {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Case,
            Self::Motherboard,
            Self::Cpu,
            Self::Gpu,
            Self::Ram,
            Self::Storage,
            Self::Psu,
            Self::Cooler,
            Self::Fan,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Case => "case",
            Self::Motherboard => "motherboard",
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Ram => "memory",
            Self::Storage => "storage",
            Self::Psu => "power supply",
            Self::Cooler => "cooler",
            Self::Fan => "case fan",
        }
    }

    /// Case fans are optional; every other category must be stocked.
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Fan)
    }
}

impl FromStr for ComponentCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "case" => Ok(Self::Case),
            "motherboard" | "mobo" => Ok(Self::Motherboard),
            "cpu" => Ok(Self::Cpu),
            "gpu" => Ok(Self::Gpu),
            "ram" | "memory" => Ok(Self::Ram),
            "storage" => Ok(Self::Storage),
            "psu" => Ok(Self::Psu),
            "cooler" | "cooling" => Ok(Self::Cooler),
            "fan" | "fans" | "case_fan" => Ok(Self::Fan),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageInterface {
    Sata,
    Nvme,
}

impl StorageInterface {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sata => "SATA",
            Self::Nvme => "NVMe",
        }
    }
}

impl FromStr for StorageInterface {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sata" => Ok(Self::Sata),
            "nvme" => Ok(Self::Nvme),
            _ => Err(()),
        }
    }
}

/// Thermal headroom a cooler provides, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingTier {
    None,
    Stock,
    Air,
    Liquid,
}

impl CoolingTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Stock => "stock",
            Self::Air => "air",
            Self::Liquid => "liquid",
        }
    }
}

impl FromStr for CoolingTier {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "stock" => Ok(Self::Stock),
            "air" => Ok(Self::Air),
            "liquid" | "aio" => Ok(Self::Liquid),
            _ => Err(()),
        }
    }
}

/// Socket, memory and bus tags used by the compatibility validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityTags {
    pub sockets: Vec<String>,
    pub memory_types: Vec<String>,
    pub pcie_generations: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
}

/// Category specific figures. Only the fields relevant to a category are populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTraits {
    pub cores: Option<u32>,
    pub vram_gb: Option<u32>,
    pub capacity_gb: Option<u32>,
    pub speed_mhz: Option<u32>,
    pub wattage: Option<u32>,
    pub interface: Option<StorageInterface>,
    pub cooling_tier: Option<CoolingTier>,
    pub max_gpu_length_mm: Option<u32>,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub id: String,
    pub category: ComponentCategory,
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub performance: u8,
    pub power_draw_watts: u32,
    pub tags: CompatibilityTags,
    pub dimensions: Dimensions,
    pub traits: ComponentTraits,
}

impl ComponentSpec {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

/// Read-only source of category grouped components.
///
/// The engine only ever reads through this trait, so a file, database or CMS backed
/// provider can replace the in-memory catalog without touching scoring logic.
pub trait CatalogRepository: Send + Sync {
    fn components(&self, category: ComponentCategory) -> &[ComponentSpec];

    fn find(&self, id: &str) -> Option<&ComponentSpec> {
        ComponentCategory::ordered()
            .into_iter()
            .flat_map(move |category| self.components(category).iter())
            .find(|component| component.id == id)
    }
}

impl<C: CatalogRepository + ?Sized> CatalogRepository for &C {
    fn components(&self, category: ComponentCategory) -> &[ComponentSpec] {
        (**self).components(category)
    }
}

impl<C: CatalogRepository + ?Sized> CatalogRepository for Arc<C> {
    fn components(&self, category: ComponentCategory) -> &[ComponentSpec] {
        (**self).components(category)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("component catalog is empty")]
    Empty,
    #[error("component catalog has no {} entries", .0.label())]
    MissingCategory(ComponentCategory),
    #[error("duplicate component id '{0}'")]
    DuplicateId(String),
    #[error("component '{id}' has an invalid price")]
    InvalidPrice { id: String },
    #[error("catalog row {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("a process-wide catalog has already been installed")]
    AlreadyInstalled,
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
}

static SHARED_CATALOG: OnceLock<ComponentCatalog> = OnceLock::new();

/// Validated in-memory catalog grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentCatalog {
    entries: BTreeMap<ComponentCategory, Vec<ComponentSpec>>,
}

impl ComponentCatalog {
    pub fn new(components: Vec<ComponentSpec>) -> Result<Self, CatalogError> {
        if components.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut entries: BTreeMap<ComponentCategory, Vec<ComponentSpec>> = BTreeMap::new();
        for component in components {
            if !component.price.is_finite() || component.price < 0.0 {
                return Err(CatalogError::InvalidPrice { id: component.id });
            }
            if !seen.insert(component.id.clone()) {
                return Err(CatalogError::DuplicateId(component.id));
            }
            entries
                .entry(component.category)
                .or_default()
                .push(component);
        }

        if let Some(missing) = ComponentCategory::ordered()
            .into_iter()
            .find(|category| category.is_required() && !entries.contains_key(category))
        {
            return Err(CatalogError::MissingCategory(missing));
        }

        Ok(Self { entries })
    }

    /// Built-in catalog used by the demo and when no catalog file is configured.
    pub fn reference() -> Self {
        Self {
            entries: group(reference::components()),
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(parser::parse_components(reader)?)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Publish this catalog as the process-wide table. Succeeds once per process.
    pub fn install(self) -> Result<&'static ComponentCatalog, CatalogError> {
        SHARED_CATALOG
            .set(self)
            .map_err(|_| CatalogError::AlreadyInstalled)?;
        SHARED_CATALOG.get().ok_or(CatalogError::Empty)
    }

    pub fn shared() -> Option<&'static ComponentCatalog> {
        SHARED_CATALOG.get()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentSpec> {
        self.entries.values().flat_map(|components| components.iter())
    }
}

impl CatalogRepository for ComponentCatalog {
    fn components(&self, category: ComponentCategory) -> &[ComponentSpec] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn group(components: Vec<ComponentSpec>) -> BTreeMap<ComponentCategory, Vec<ComponentSpec>> {
    let mut entries: BTreeMap<ComponentCategory, Vec<ComponentSpec>> = BTreeMap::new();
    for component in components {
        entries
            .entry(component.category)
            .or_default()
            .push(component);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str, category: ComponentCategory, price: f64) -> ComponentSpec {
        ComponentSpec {
            id: id.to_string(),
            category,
            brand: "Test".to_string(),
            name: id.to_string(),
            price,
            performance: 50,
            power_draw_watts: 10,
            tags: CompatibilityTags::default(),
            dimensions: Dimensions::default(),
            traits: ComponentTraits::default(),
        }
    }

    fn one_of_each() -> Vec<ComponentSpec> {
        ComponentCategory::ordered()
            .into_iter()
            .filter(|category| category.is_required())
            .map(|category| spec(category.label(), category, 100.0))
            .collect()
    }

    #[test]
    fn reference_catalog_stocks_every_category() {
        let catalog = ComponentCatalog::reference();
        for category in ComponentCategory::ordered() {
            assert!(
                !catalog.components(category).is_empty(),
                "{} missing from reference catalog",
                category.label()
            );
        }
        let rebuilt = ComponentCatalog::new(catalog.iter().cloned().collect())
            .expect("reference catalog passes validation");
        assert_eq!(rebuilt.len(), catalog.len());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            ComponentCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut components = one_of_each();
        components.push(spec("cpu", ComponentCategory::Cpu, 120.0));
        match ComponentCatalog::new(components) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "cpu"),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_required_category() {
        let components = one_of_each()
            .into_iter()
            .filter(|component| component.category != ComponentCategory::Psu)
            .collect();
        assert!(matches!(
            ComponentCatalog::new(components),
            Err(CatalogError::MissingCategory(ComponentCategory::Psu))
        ));
    }

    #[test]
    fn rejects_negative_prices() {
        let mut components = one_of_each();
        components[0].price = -1.0;
        assert!(matches!(
            ComponentCatalog::new(components),
            Err(CatalogError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn find_looks_across_categories() {
        let catalog = ComponentCatalog::new(one_of_each()).expect("catalog builds");
        let found = catalog.find("storage").expect("storage entry present");
        assert_eq!(found.category, ComponentCategory::Storage);
        assert!(catalog.find("missing").is_none());
        assert!(catalog.components(ComponentCategory::Fan).is_empty());
    }
}
