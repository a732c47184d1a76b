//! Build recommendation pipeline: questionnaire, allocation, compatibility, synergy
//! scoring, classification and advisories, plus the session layer that serves them.

pub mod advisory;
pub mod allocation;
pub mod build;
pub mod catalog;
pub mod classifier;
pub mod compatibility;
pub mod facade;
pub mod metrics;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod service;
pub mod synergy;

#[cfg(test)]
mod tests;

pub use advisory::{Advisory, AdvisoryComposer, AdvisoryContext, AdvisoryKind, BottleneckFlags};
pub use allocation::{
    over_budget_note, psu_covering, Allocation, AllocationError, AllocationPolicy,
    BudgetAllocator, Fulfilment, ShareTable,
};
pub use build::{CandidateBuild, PartsSummary};
pub use catalog::{
    CatalogError, CatalogRepository, CompatibilityTags, ComponentCatalog, ComponentCategory,
    ComponentSpec, ComponentTraits, CoolingTier, Dimensions, StorageInterface,
};
pub use classifier::{classify, BuildArchetype};
pub use compatibility::{validate, CompatibilityIssue, CompatibilityRule, Severity};
pub use facade::{
    RecommendationEngine, RecommendationError, RecommendationResult, SynergyResult,
};
pub use metrics::BuildMetrics;
pub use questionnaire::{
    Aesthetics, BuildProfile, PerformanceAmbition, PriorityComponent, ProfileError,
    QuestionnaireAnswers, Timeline, UseCase,
};
pub use repository::{
    BuildSessionView, RecommendationRecord, RecommendationRepository, RepositoryError,
    SessionId,
};
pub use router::recommendation_router;
pub use service::{BuildSessionError, BuildSessionService};
pub use synergy::{
    Grade, SynergyError, SynergyRule, SynergyScore, SynergyScorer, SynergyWeights,
    TriggeredRule,
};
