use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rigsmith::recommendation::{
    CatalogError, CatalogRepository, ComponentCatalog, ComponentCategory, CoolingTier,
    QuestionnaireAnswers, RecommendationEngine, StorageInterface,
};

const HEADER: &str = "id,category,brand,name,price,performance,power_draw_watts,sockets,memory_types,pcie_generations,length_mm,width_mm,height_mm,cores,vram_gb,capacity_gb,speed_mhz,wattage,interface,cooling_tier,max_gpu_length_mm";

fn sample_catalog() -> ComponentCatalog {
    let data = include_bytes!("../data/sample_catalog.csv");
    ComponentCatalog::from_csv_reader(&data[..]).expect("sample catalog imports")
}

#[test]
fn sample_file_stocks_every_category() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 26);
    for category in ComponentCategory::ordered() {
        assert!(
            !catalog.components(category).is_empty(),
            "{} missing",
            category.label()
        );
    }

    let cooler = catalog.find("cool-aio-360").expect("aio present");
    assert_eq!(cooler.traits.cooling_tier, Some(CoolingTier::Liquid));
    let drive = catalog.find("ssd-sata-1tb").expect("sata drive present");
    assert_eq!(drive.traits.interface, Some(StorageInterface::Sata));
    let board = catalog.find("mb-b650").expect("board present");
    assert_eq!(board.tags.pcie_generations, vec![4, 5]);
}

#[test]
fn engine_recommends_from_imported_catalog() {
    let engine = RecommendationEngine::new(sample_catalog());
    let answers = QuestionnaireAnswers {
        purpose: "gaming".to_string(),
        budget: 1600.0,
        performance_ambition: "high".to_string(),
        priority_component: "gpu".to_string(),
        aesthetics: "rgb_maximal".to_string(),
        timeline: "flexible".to_string(),
    };
    let today = NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date");

    let result = engine
        .recommend(&answers, today, &mut StdRng::seed_from_u64(2))
        .expect("recommendation succeeds");
    assert!(result.valid);
    assert_eq!(result.build.fans.len(), 3);
    assert!(result
        .build
        .components()
        .all(|part| engine.catalog().find(&part.id).is_some()));
}

#[test]
fn missing_category_is_reported() {
    let csv = format!(
        "{HEADER}\n\
cpu-1,cpu,AMD,Ryzen 5 7600,199,72,65,AM5,,,,,,6,,,,,,,\n\
gpu-1,gpu,AMD,Radeon RX 7600,259,62,165,,,4,204,115,40,,8,,,,,,\n"
    );
    match ComponentCatalog::from_csv_reader(csv.as_bytes()) {
        Err(CatalogError::MissingCategory(category)) => {
            assert_eq!(category, ComponentCategory::Case)
        }
        other => panic!("expected missing category, got {other:?}"),
    }
}

#[test]
fn negative_prices_are_rejected() {
    let data = String::from_utf8_lossy(include_bytes!("../data/sample_catalog.csv"))
        .replace("Ryzen 5 5600,119.00", "Ryzen 5 5600,-119.00");
    match ComponentCatalog::from_csv_reader(data.as_bytes()) {
        Err(CatalogError::InvalidPrice { id }) => assert_eq!(id, "cpu-r5-5600"),
        other => panic!("expected invalid price, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_io_error() {
    let result = ComponentCatalog::from_csv_path("does/not/exist/catalog.csv");
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn shared_catalog_installs_once() {
    let installed = sample_catalog().install().expect("first install succeeds");
    assert_eq!(installed.len(), 26);
    assert!(ComponentCatalog::shared().is_some());

    assert!(matches!(
        ComponentCatalog::reference().install(),
        Err(CatalogError::AlreadyInstalled)
    ));
}
