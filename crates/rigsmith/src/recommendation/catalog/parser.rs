use super::{
    CatalogError, CompatibilityTags, ComponentCategory, ComponentSpec, ComponentTraits,
    CoolingTier, Dimensions, StorageInterface,
};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const LIST_SEPARATOR: char = '|';

pub(crate) fn parse_components<R: Read>(reader: R) -> Result<Vec<ComponentSpec>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut components = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = index as u64 + 2;
        components.push(row.into_spec(line)?);
    }

    Ok(components)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    category: String,
    brand: String,
    name: String,
    price: f64,
    performance: u8,
    #[serde(default)]
    power_draw_watts: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sockets: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    memory_types: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pcie_generations: Option<String>,
    #[serde(default)]
    length_mm: Option<u32>,
    #[serde(default)]
    width_mm: Option<u32>,
    #[serde(default)]
    height_mm: Option<u32>,
    #[serde(default)]
    cores: Option<u32>,
    #[serde(default)]
    vram_gb: Option<u32>,
    #[serde(default)]
    capacity_gb: Option<u32>,
    #[serde(default)]
    speed_mhz: Option<u32>,
    #[serde(default)]
    wattage: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    interface: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cooling_tier: Option<String>,
    #[serde(default)]
    max_gpu_length_mm: Option<u32>,
}

impl CatalogRow {
    fn into_spec(self, line: u64) -> Result<ComponentSpec, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRow { line, reason };

        let category = self
            .category
            .parse::<ComponentCategory>()
            .map_err(|_| invalid(format!("unknown category '{}'", self.category)))?;

        if self.performance > 100 {
            return Err(invalid(format!(
                "performance {} is outside 0-100",
                self.performance
            )));
        }

        let interface = self
            .interface
            .as_deref()
            .map(|raw| {
                raw.parse::<StorageInterface>()
                    .map_err(|_| invalid(format!("unknown storage interface '{raw}'")))
            })
            .transpose()?;

        let cooling_tier = self
            .cooling_tier
            .as_deref()
            .map(|raw| {
                raw.parse::<CoolingTier>()
                    .map_err(|_| invalid(format!("unknown cooling tier '{raw}'")))
            })
            .transpose()?;

        let pcie_generations = split_list(self.pcie_generations.as_deref())
            .into_iter()
            .map(|raw| {
                raw.parse::<u8>()
                    .map_err(|_| invalid(format!("invalid PCIe generation '{raw}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ComponentSpec {
            id: self.id,
            category,
            brand: self.brand,
            name: self.name,
            price: self.price,
            performance: self.performance,
            power_draw_watts: self.power_draw_watts.unwrap_or(0),
            tags: CompatibilityTags {
                sockets: split_list(self.sockets.as_deref()),
                memory_types: split_list(self.memory_types.as_deref()),
                pcie_generations,
            },
            dimensions: Dimensions {
                length_mm: self.length_mm.unwrap_or(0),
                width_mm: self.width_mm.unwrap_or(0),
                height_mm: self.height_mm.unwrap_or(0),
            },
            traits: ComponentTraits {
                cores: self.cores,
                vram_gb: self.vram_gb,
                capacity_gb: self.capacity_gb,
                speed_mhz: self.speed_mhz,
                wattage: self.wattage,
                interface,
                cooling_tier,
                max_gpu_length_mm: self.max_gpu_length_mm,
            },
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
