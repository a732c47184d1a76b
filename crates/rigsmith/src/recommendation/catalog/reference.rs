use super::{
    CompatibilityTags, ComponentCategory, ComponentSpec, ComponentTraits, CoolingTier,
    Dimensions, StorageInterface,
};

#[rustfmt::skip]
pub(super) fn components() -> Vec<ComponentSpec> {
    vec![
        // Processors
        cpu("cpu-i3-12100f", "Intel", "Core i3-12100F", 89.0, 48, 58, "LGA1700", 4),
        cpu("cpu-r5-5600", "AMD", "Ryzen 5 5600", 119.0, 60, 65, "AM4", 6),
        cpu("cpu-i5-13400f", "Intel", "Core i5-13400F", 189.0, 70, 65, "LGA1700", 10),
        cpu("cpu-r5-7600", "AMD", "Ryzen 5 7600", 199.0, 72, 65, "AM5", 6),
        cpu("cpu-i5-14600k", "Intel", "Core i5-14600K", 289.0, 82, 125, "LGA1700", 14),
        cpu("cpu-r7-7800x3d", "AMD", "Ryzen 7 7800X3D", 369.0, 90, 120, "AM5", 8),
        cpu("cpu-r9-7950x", "AMD", "Ryzen 9 7950X", 549.0, 96, 170, "AM5", 16),
        cpu("cpu-i9-14900k", "Intel", "Core i9-14900K", 569.0, 97, 253, "LGA1700", 24),
        // Graphics
        gpu("gpu-rx7600", "AMD", "Radeon RX 7600", 259.0, 62, 165, 8, 204),
        gpu("gpu-rtx4060", "NVIDIA", "GeForce RTX 4060", 299.0, 66, 115, 8, 240),
        gpu("gpu-rtx4060ti-16", "NVIDIA", "GeForce RTX 4060 Ti 16GB", 449.0, 74, 165, 16, 244),
        gpu("gpu-rx7800xt", "AMD", "Radeon RX 7800 XT", 499.0, 84, 263, 16, 267),
        gpu("gpu-rtx4070s", "NVIDIA", "GeForce RTX 4070 Super", 599.0, 88, 220, 12, 267),
        gpu("gpu-rtx4080s", "NVIDIA", "GeForce RTX 4080 Super", 999.0, 95, 320, 16, 304),
        gpu("gpu-rtx4090", "NVIDIA", "GeForce RTX 4090", 1799.0, 100, 450, 24, 336),
        // Motherboards
        board("mb-b550", "MSI", "B550 Tomahawk", 139.0, 58, "AM4", "DDR4", &[3, 4]),
        board("mb-b760", "ASRock", "B760M Pro RS", 129.0, 56, "LGA1700", "DDR5", &[4]),
        board("mb-b650", "Gigabyte", "B650 Aorus Elite AX", 189.0, 66, "AM5", "DDR5", &[4, 5]),
        board("mb-z790", "ASUS", "ROG Strix Z790-E", 399.0, 88, "LGA1700", "DDR5", &[4, 5]),
        board("mb-x670e", "ASUS", "ProArt X670E Creator", 459.0, 90, "AM5", "DDR5", &[4, 5]),
        // Memory
        memory("ram-ddr4-16", "Corsair", "Vengeance LPX 16GB DDR4-3200", 42.0, 50, "DDR4", 16, 3200),
        memory("ram-ddr4-32", "G.Skill", "Ripjaws V 32GB DDR4-3600", 69.0, 58, "DDR4", 32, 3600),
        memory("ram-ddr5-16", "Kingston", "Fury Beast 16GB DDR5-4800", 54.0, 55, "DDR5", 16, 4800),
        memory("ram-ddr5-32", "G.Skill", "Flare X5 32GB DDR5-6000", 104.0, 72, "DDR5", 32, 6000),
        memory("ram-ddr5-64", "Corsair", "Vengeance 64GB DDR5-6000", 199.0, 80, "DDR5", 64, 6000),
        memory("ram-ddr5-128", "Kingston", "Fury Beast 128GB DDR5-5200", 389.0, 84, "DDR5", 128, 5200),
        // Storage
        drive("ssd-sata-1tb", "Samsung", "870 EVO 1TB", 79.0, 45, StorageInterface::Sata, 1000),
        drive("ssd-nvme-1tb", "WD", "Black SN770 1TB", 69.0, 70, StorageInterface::Nvme, 1000),
        drive("ssd-nvme-2tb", "Samsung", "990 Pro 2TB", 169.0, 90, StorageInterface::Nvme, 2000),
        drive("ssd-nvme-4tb", "Crucial", "T500 4TB", 289.0, 88, StorageInterface::Nvme, 4000),
        // Power supplies
        psu("psu-550", "EVGA", "550 BQ", 59.0, 45, 550),
        psu("psu-650", "Corsair", "RM650e", 84.0, 60, 650),
        psu("psu-750", "Corsair", "RM750e", 99.0, 70, 750),
        psu("psu-850", "Seasonic", "Focus GX-850", 139.0, 80, 850),
        psu("psu-1000", "be quiet!", "Dark Power 13 1000W", 249.0, 92, 1000),
        psu("psu-1200", "Seasonic", "Prime TX-1200", 329.0, 96, 1200),
        // Cooling
        cooler("cool-stock", "Generic", "Wraith Stealth", 0.0, 30, CoolingTier::Stock),
        cooler("cool-ak400", "DeepCool", "AK400", 35.0, 60, CoolingTier::Air),
        cooler("cool-nhd15", "Noctua", "NH-D15", 109.0, 85, CoolingTier::Air),
        cooler("cool-aio-360", "Arctic", "Liquid Freezer III 360", 119.0, 92, CoolingTier::Liquid),
        // Cases
        case("case-nr200", "Cooler Master", "NR200P", 89.0, 60, 330),
        case("case-4000d", "Corsair", "4000D Airflow", 104.0, 72, 360),
        case("case-lancool", "Lian Li", "Lancool III", 149.0, 86, 435),
        case("case-o11", "Lian Li", "O11 Dynamic EVO", 169.0, 88, 426),
        // Fans
        fan("fan-p12", "Arctic", "P12 PWM", 8.0, 50),
        fan("fan-al120", "Lian Li", "UNI FAN AL120 RGB", 27.0, 75),
        fan("fan-nf-a12", "Noctua", "NF-A12x25", 33.0, 85),
    ]
}

fn base(id: &str, category: ComponentCategory, brand: &str, name: &str) -> ComponentSpec {
    ComponentSpec {
        id: id.to_string(),
        category,
        brand: brand.to_string(),
        name: name.to_string(),
        price: 0.0,
        performance: 0,
        power_draw_watts: 0,
        tags: CompatibilityTags::default(),
        dimensions: Dimensions::default(),
        traits: ComponentTraits::default(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cpu(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    draw: u32,
    socket: &str,
    cores: u32,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Cpu, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = draw;
    spec.tags.sockets = vec![socket.to_string()];
    spec.traits.cores = Some(cores);
    spec
}

#[allow(clippy::too_many_arguments)]
fn gpu(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    draw: u32,
    vram_gb: u32,
    length_mm: u32,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Gpu, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = draw;
    spec.tags.pcie_generations = vec![4];
    spec.dimensions = Dimensions {
        length_mm,
        width_mm: 120,
        height_mm: 50,
    };
    spec.traits.vram_gb = Some(vram_gb);
    spec
}

#[allow(clippy::too_many_arguments)]
fn board(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    socket: &str,
    memory_type: &str,
    pcie_generations: &[u8],
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Motherboard, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = 45;
    spec.tags = CompatibilityTags {
        sockets: vec![socket.to_string()],
        memory_types: vec![memory_type.to_string()],
        pcie_generations: pcie_generations.to_vec(),
    };
    spec.dimensions = Dimensions {
        length_mm: 305,
        width_mm: 244,
        height_mm: 40,
    };
    spec
}

#[allow(clippy::too_many_arguments)]
fn memory(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    memory_type: &str,
    capacity_gb: u32,
    speed_mhz: u32,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Ram, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = if capacity_gb >= 64 { 20 } else { 10 };
    spec.tags.memory_types = vec![memory_type.to_string()];
    spec.traits.capacity_gb = Some(capacity_gb);
    spec.traits.speed_mhz = Some(speed_mhz);
    spec
}

fn drive(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    interface: StorageInterface,
    capacity_gb: u32,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Storage, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = match interface {
        StorageInterface::Sata => 5,
        StorageInterface::Nvme => 7,
    };
    spec.traits.interface = Some(interface);
    spec.traits.capacity_gb = Some(capacity_gb);
    spec
}

fn psu(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    wattage: u32,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Psu, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.traits.wattage = Some(wattage);
    spec
}

fn cooler(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    tier: CoolingTier,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Cooler, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = match tier {
        CoolingTier::Liquid => 15,
        _ => 5,
    };
    spec.traits.cooling_tier = Some(tier);
    spec
}

fn case(
    id: &str,
    brand: &str,
    name: &str,
    price: f64,
    performance: u8,
    max_gpu_length_mm: u32,
) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Case, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.traits.max_gpu_length_mm = Some(max_gpu_length_mm);
    spec
}

fn fan(id: &str, brand: &str, name: &str, price: f64, performance: u8) -> ComponentSpec {
    let mut spec = base(id, ComponentCategory::Fan, brand, name);
    spec.price = price;
    spec.performance = performance;
    spec.power_draw_watts = 3;
    spec
}
