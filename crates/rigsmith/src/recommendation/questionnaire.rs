//! Typed intent profile collected by the build questionnaire.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw answers as they arrive from the questionnaire UI or API.
///
/// Every enumerated answer is kept as text so validation can report exactly which
/// field was unrecognised instead of failing inside the deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub purpose: String,
    pub budget: f64,
    #[serde(alias = "performanceAmbition")]
    pub performance_ambition: String,
    #[serde(alias = "priorityComponent")]
    pub priority_component: String,
    pub aesthetics: String,
    pub timeline: String,
}

/// Validation failures for questionnaire answers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid profile: unrecognised {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
    #[error("invalid profile: budget must be a positive amount (found {0})")]
    NonPositiveBudget(f64),
}

/// What the machine will mostly be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    Gaming,
    Streaming,
    Creative,
    Workstation,
    General,
}

impl UseCase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::Streaming => "streaming",
            Self::Creative => "creative",
            Self::Workstation => "workstation",
            Self::General => "general",
        }
    }
}

impl FromStr for UseCase {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gaming" => Ok(Self::Gaming),
            "streaming" => Ok(Self::Streaming),
            "creative" | "content_creation" => Ok(Self::Creative),
            "workstation" => Ok(Self::Workstation),
            "general" => Ok(Self::General),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceAmbition {
    Entry,
    Balanced,
    High,
    Maximum,
}

impl FromStr for PerformanceAmbition {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "entry" => Ok(Self::Entry),
            "balanced" => Ok(Self::Balanced),
            "high" => Ok(Self::High),
            "maximum" => Ok(Self::Maximum),
            _ => Err(()),
        }
    }
}

/// Component the user wants the budget to favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityComponent {
    Gpu,
    Cpu,
    Memory,
    Storage,
    Balanced,
}

impl FromStr for PriorityComponent {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gpu" => Ok(Self::Gpu),
            "cpu" => Ok(Self::Cpu),
            "memory" | "ram" => Ok(Self::Memory),
            "storage" => Ok(Self::Storage),
            "balanced" | "none" => Ok(Self::Balanced),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aesthetics {
    Minimal,
    RgbModerate,
    RgbMaximal,
}

impl Aesthetics {
    /// Number of case fans the look calls for.
    pub const fn fan_count(self) -> usize {
        match self {
            Self::Minimal => 0,
            Self::RgbModerate => 2,
            Self::RgbMaximal => 3,
        }
    }
}

impl FromStr for Aesthetics {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "minimal" => Ok(Self::Minimal),
            "rgb_moderate" => Ok(Self::RgbModerate),
            "rgb_maximal" | "rgb_max" => Ok(Self::RgbMaximal),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Flexible,
    Standard,
    Rush,
}

impl FromStr for Timeline {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "flexible" => Ok(Self::Flexible),
            "standard" => Ok(Self::Standard),
            "rush" => Ok(Self::Rush),
            _ => Err(()),
        }
    }
}

/// Validated intent snapshot. Immutable once handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildProfile {
    purpose: UseCase,
    budget: f64,
    performance_ambition: PerformanceAmbition,
    priority_component: PriorityComponent,
    aesthetics: Aesthetics,
    timeline: Timeline,
}

impl BuildProfile {
    pub fn new(
        purpose: UseCase,
        budget: f64,
        performance_ambition: PerformanceAmbition,
        priority_component: PriorityComponent,
        aesthetics: Aesthetics,
        timeline: Timeline,
    ) -> Result<Self, ProfileError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(ProfileError::NonPositiveBudget(budget));
        }

        Ok(Self {
            purpose,
            budget,
            performance_ambition,
            priority_component,
            aesthetics,
            timeline,
        })
    }

    pub fn purpose(&self) -> UseCase {
        self.purpose
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn performance_ambition(&self) -> PerformanceAmbition {
        self.performance_ambition
    }

    pub fn priority_component(&self) -> PriorityComponent {
        self.priority_component
    }

    pub fn aesthetics(&self) -> Aesthetics {
        self.aesthetics
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline
    }
}

impl TryFrom<&QuestionnaireAnswers> for BuildProfile {
    type Error = ProfileError;

    fn try_from(answers: &QuestionnaireAnswers) -> Result<Self, Self::Error> {
        BuildProfile::new(
            parse_field("purpose", &answers.purpose)?,
            answers.budget,
            parse_field("performance_ambition", &answers.performance_ambition)?,
            parse_field("priority_component", &answers.priority_component)?,
            parse_field("aesthetics", &answers.aesthetics)?,
            parse_field("timeline", &answers.timeline)?,
        )
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ProfileError> {
    let normalized = raw
        .trim()
        .to_ascii_lowercase()
        .replace(|c: char| c == '-' || c == ' ', "_");
    normalized.parse::<T>().map_err(|_| ProfileError::InvalidField {
        field,
        value: raw.to_string(),
    })
}
