use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::recommendation::catalog::{
    CompatibilityTags, ComponentCatalog, ComponentCategory, ComponentSpec, ComponentTraits,
    CoolingTier, Dimensions, StorageInterface,
};
use crate::recommendation::metrics::BuildMetrics;
use crate::recommendation::repository::{
    RecommendationRecord, RecommendationRepository, RepositoryError, SessionId,
};
use crate::recommendation::{
    BuildSessionService, CandidateBuild, QuestionnaireAnswers, RecommendationEngine,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

pub(super) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn part(
    id: &str,
    category: ComponentCategory,
    brand: &str,
    name: &str,
    price: f64,
) -> ComponentSpec {
    ComponentSpec {
        id: id.to_string(),
        category,
        brand: brand.to_string(),
        name: name.to_string(),
        price,
        performance: 50,
        power_draw_watts: 0,
        tags: CompatibilityTags::default(),
        dimensions: Dimensions::default(),
        traits: ComponentTraits::default(),
    }
}

pub(super) fn cpu(
    id: &str,
    name: &str,
    price: f64,
    performance: u8,
    draw: u32,
    cores: u32,
) -> ComponentSpec {
    let mut spec = part(id, ComponentCategory::Cpu, "AMD", name, price);
    spec.performance = performance;
    spec.power_draw_watts = draw;
    spec.tags.sockets = vec!["AM5".to_string()];
    spec.traits.cores = Some(cores);
    spec
}

pub(super) fn gpu(
    id: &str,
    name: &str,
    price: f64,
    performance: u8,
    draw: u32,
    vram_gb: u32,
) -> ComponentSpec {
    let mut spec = part(id, ComponentCategory::Gpu, "AMD", name, price);
    spec.performance = performance;
    spec.power_draw_watts = draw;
    spec.tags.pcie_generations = vec![4];
    spec.dimensions.length_mm = 267;
    spec.traits.vram_gb = Some(vram_gb);
    spec
}

pub(super) fn psu(id: &str, price: f64, wattage: u32) -> ComponentSpec {
    let mut spec = part(id, ComponentCategory::Psu, "Corsair", &format!("RM{wattage}e"), price);
    spec.traits.wattage = Some(wattage);
    spec
}

/// Ten entry catalog used by the golden scenario.
pub(super) fn golden_components() -> Vec<ComponentSpec> {
    let mut board = part(
        "mobo-b650",
        ComponentCategory::Motherboard,
        "MSI",
        "B650 Tomahawk",
        149.0,
    );
    board.power_draw_watts = 40;
    board.tags = CompatibilityTags {
        sockets: vec!["AM5".to_string()],
        memory_types: vec!["DDR5".to_string()],
        pcie_generations: vec![4, 5],
    };

    let mut memory = part(
        "ram-ddr5-32",
        ComponentCategory::Ram,
        "G.Skill",
        "Flare X5 32GB DDR5-6000",
        104.0,
    );
    memory.power_draw_watts = 10;
    memory.tags.memory_types = vec!["DDR5".to_string()];
    memory.traits.capacity_gb = Some(32);
    memory.traits.speed_mhz = Some(6000);

    let mut drive = part(
        "storage-nvme-1tb",
        ComponentCategory::Storage,
        "WD",
        "Black SN770 1TB",
        79.0,
    );
    drive.power_draw_watts = 7;
    drive.traits.interface = Some(StorageInterface::Nvme);
    drive.traits.capacity_gb = Some(1000);

    let mut cooler = part("cooler-air", ComponentCategory::Cooler, "DeepCool", "AK400", 45.0);
    cooler.power_draw_watts = 5;
    cooler.traits.cooling_tier = Some(CoolingTier::Air);

    let mut case = part("case-airflow", ComponentCategory::Case, "Corsair", "4000D Airflow", 74.0);
    case.traits.max_gpu_length_mm = Some(360);

    vec![
        cpu("cpu-r5-7600", "Ryzen 5 7600", 199.0, 72, 65, 6),
        cpu("cpu-r7-7800x3d", "Ryzen 7 7800X3D", 369.0, 90, 120, 8),
        gpu("gpu-rtx4070s", "GeForce RTX 4070 Super", 589.0, 88, 220, 12),
        gpu("gpu-rx7800xt", "Radeon RX 7800 XT", 499.0, 84, 263, 16),
        board,
        memory,
        drive,
        psu("psu-750", 99.0, 750),
        cooler,
        case,
    ]
}

pub(super) fn golden_catalog() -> ComponentCatalog {
    ComponentCatalog::new(golden_components()).expect("golden catalog validates")
}

/// Golden catalog with its PSU range swapped out.
pub(super) fn catalog_with_psus(units: Vec<ComponentSpec>) -> ComponentCatalog {
    let mut components: Vec<ComponentSpec> = golden_components()
        .into_iter()
        .filter(|component| component.category != ComponentCategory::Psu)
        .collect();
    components.extend(units);
    ComponentCatalog::new(components).expect("catalog validates")
}

pub(super) fn find(id: &str) -> ComponentSpec {
    golden_components()
        .into_iter()
        .find(|component| component.id == id)
        .expect("component in golden catalog")
}

/// The build the golden scenario is expected to produce.
pub(super) fn golden_build() -> CandidateBuild {
    CandidateBuild {
        case: find("case-airflow"),
        motherboard: find("mobo-b650"),
        cpu: find("cpu-r5-7600"),
        gpu: find("gpu-rx7800xt"),
        psu: find("psu-750"),
        cooler: find("cooler-air"),
        memory: vec![find("ram-ddr5-32")],
        storage: vec![find("storage-nvme-1tb")],
        fans: Vec::new(),
    }
}

pub(super) fn golden_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        purpose: "gaming".to_string(),
        budget: 1500.0,
        performance_ambition: "high".to_string(),
        priority_component: "gpu".to_string(),
        aesthetics: "rgb_moderate".to_string(),
        timeline: "standard".to_string(),
    }
}

/// Neutral metrics: nothing fires except the PSU sweet spot bonus.
pub(super) fn metrics(cores: u32, vram_gb: u32, ram_capacity_gb: u32) -> BuildMetrics {
    BuildMetrics {
        cores,
        vram_gb,
        ram_capacity_gb,
        ram_speed_mhz: 6000,
        estimated_psu_load_fraction: 0.55,
        cooling_tier: CoolingTier::Air,
        storage_interface: StorageInterface::Nvme,
    }
}

pub(super) fn build_service<R: RecommendationRepository + 'static>(
    repository: Arc<R>,
) -> Arc<BuildSessionService<ComponentCatalog, R>> {
    let engine = Arc::new(RecommendationEngine::new(golden_catalog()));
    Arc::new(BuildSessionService::new(engine, repository))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, RecommendationRecord>>>,
}

impl RecommendationRepository for MemoryRepository {
    fn insert(
        &self,
        record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl RecommendationRepository for ConflictRepository {
    fn insert(
        &self,
        _record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl RecommendationRepository for UnavailableRepository {
    fn insert(
        &self,
        _record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
