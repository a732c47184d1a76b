use serde::{Deserialize, Serialize};

use super::build::CandidateBuild;
use super::catalog::ComponentCategory;

/// Minimum spare capacity a PSU should keep above the summed draw.
pub const PSU_SAFETY_MARGIN: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityRule {
    SocketMismatch,
    MemoryTypeMismatch,
    PcieGeneration,
    GpuClearance,
    PsuOverload,
    PsuHeadroom,
}

impl CompatibilityRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SocketMismatch => "socket_mismatch",
            Self::MemoryTypeMismatch => "memory_type_mismatch",
            Self::PcieGeneration => "pcie_generation",
            Self::GpuClearance => "gpu_clearance",
            Self::PsuOverload => "psu_overload",
            Self::PsuHeadroom => "psu_headroom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    pub rule: CompatibilityRule,
    pub categories: [ComponentCategory; 2],
    pub message: String,
    pub severity: Severity,
}

impl CompatibilityIssue {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }

    pub fn concerns_psu(&self) -> bool {
        matches!(
            self.rule,
            CompatibilityRule::PsuOverload | CompatibilityRule::PsuHeadroom
        )
    }
}

/// Runs every pairwise rule against the build and returns the findings in rule order.
pub fn validate(build: &CandidateBuild) -> Vec<CompatibilityIssue> {
    let mut issues = Vec::new();
    let board = &build.motherboard;

    let socket_fits = build.cpu.tags.sockets.iter().any(|socket| {
        board
            .tags
            .sockets
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(socket))
    });
    if !socket_fits {
        issues.push(CompatibilityIssue {
            rule: CompatibilityRule::SocketMismatch,
            categories: [ComponentCategory::Cpu, ComponentCategory::Motherboard],
            message: format!(
                "{} ({}) does not fit the {} socket on {}",
                build.cpu.display_name(),
                describe(&build.cpu.tags.sockets),
                describe(&board.tags.sockets),
                board.display_name()
            ),
            severity: Severity::Critical,
        });
    }

    for kit in &build.memory {
        let supported = kit.tags.memory_types.iter().any(|kind| {
            board
                .tags
                .memory_types
                .iter()
                .any(|slot| slot.eq_ignore_ascii_case(kind))
        });
        if !supported {
            issues.push(CompatibilityIssue {
                rule: CompatibilityRule::MemoryTypeMismatch,
                categories: [ComponentCategory::Ram, ComponentCategory::Motherboard],
                message: format!(
                    "{} is {} memory but {} only takes {}",
                    kit.display_name(),
                    describe(&kit.tags.memory_types),
                    board.display_name(),
                    describe(&board.tags.memory_types)
                ),
                severity: Severity::Critical,
            });
        }
    }

    let unsupported_generations: Vec<u8> = build
        .gpu
        .tags
        .pcie_generations
        .iter()
        .copied()
        .filter(|generation| !board.tags.pcie_generations.contains(generation))
        .collect();
    if !unsupported_generations.is_empty() {
        issues.push(CompatibilityIssue {
            rule: CompatibilityRule::PcieGeneration,
            categories: [ComponentCategory::Gpu, ComponentCategory::Motherboard],
            message: format!(
                "{} expects PCIe gen {} which {} does not provide; expect reduced bandwidth",
                build.gpu.display_name(),
                join_generations(&unsupported_generations),
                board.display_name()
            ),
            severity: Severity::Normal,
        });
    }

    let gpu_length = build.gpu.dimensions.length_mm;
    if let Some(clearance) = build.case.traits.max_gpu_length_mm {
        if gpu_length > 0 && gpu_length > clearance {
            issues.push(CompatibilityIssue {
                rule: CompatibilityRule::GpuClearance,
                categories: [ComponentCategory::Gpu, ComponentCategory::Case],
                message: format!(
                    "{} is {gpu_length} mm long but {} clears only {clearance} mm",
                    build.gpu.display_name(),
                    build.case.display_name()
                ),
                severity: Severity::Critical,
            });
        }
    }

    let draw = build.power_draw_watts();
    let wattage = build.psu_wattage();
    if wattage < draw {
        issues.push(CompatibilityIssue {
            rule: CompatibilityRule::PsuOverload,
            categories: [ComponentCategory::Psu, ComponentCategory::Gpu],
            message: format!(
                "{} supplies {wattage} W but the build draws an estimated {draw} W",
                build.psu.display_name()
            ),
            severity: Severity::Critical,
        });
    } else if draw > 0 {
        let margin = f64::from(wattage - draw) / f64::from(draw);
        if margin < PSU_SAFETY_MARGIN {
            issues.push(CompatibilityIssue {
                rule: CompatibilityRule::PsuHeadroom,
                categories: [ComponentCategory::Psu, ComponentCategory::Gpu],
                message: format!(
                    "{} leaves only {:.0}% headroom over the estimated {draw} W draw",
                    build.psu.display_name(),
                    margin * 100.0
                ),
                severity: Severity::Normal,
            });
        }
    }

    issues
}

fn describe(values: &[String]) -> String {
    if values.is_empty() {
        "unknown".to_string()
    } else {
        values.join("/")
    }
}

fn join_generations(generations: &[u8]) -> String {
    generations
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("/")
}
