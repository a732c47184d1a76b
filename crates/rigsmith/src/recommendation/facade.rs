use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::advisory::{Advisory, AdvisoryComposer, AdvisoryContext};
use super::allocation::{
    over_budget_note, psu_covering, AllocationError, AllocationPolicy, BudgetAllocator,
    Fulfilment,
};
use super::build::{CandidateBuild, PartsSummary};
use super::catalog::CatalogRepository;
use super::classifier::classify;
use super::compatibility::{validate, CompatibilityIssue, PSU_SAFETY_MARGIN};
use super::metrics::BuildMetrics;
use super::questionnaire::{BuildProfile, ProfileError, QuestionnaireAnswers};
use super::synergy::{Grade, SynergyError, SynergyScorer, SynergyWeights, TriggeredRule};
use crate::config::EngineConfig;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error("internal scoring invariant violated: {0}")]
    Invariant(#[from] SynergyError),
}

impl RecommendationError {
    /// Errors caused by the caller's answers rather than the engine or catalog.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Profile(_) | Self::Allocation(AllocationError::BudgetTooLow { .. })
        )
    }
}

/// Grade, archetype and narrative for a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyResult {
    pub score: u8,
    pub grade: Grade,
    pub profile: String,
    pub feedback: String,
    pub ctas: Vec<String>,
}

/// Everything the engine produces for one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub parts: PartsSummary,
    pub fulfilment: Fulfilment,
    pub notes: Vec<String>,
    #[serde(flatten)]
    pub synergy: SynergyResult,
    pub valid: bool,
    pub issues: Vec<CompatibilityIssue>,
    pub total_price: f64,
    pub triggered_rules: Vec<TriggeredRule>,
    #[serde(skip)]
    pub advisories: Vec<Advisory>,
    pub build: CandidateBuild,
}

/// Single entry point: profile in, graded and explained build out.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<C> {
    catalog: C,
    allocator: BudgetAllocator,
    scorer: SynergyScorer,
    composer: AdvisoryComposer,
}

impl<C: CatalogRepository> RecommendationEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            allocator: BudgetAllocator::default(),
            scorer: SynergyScorer::default(),
            composer: AdvisoryComposer::new(),
        }
    }

    pub fn with_config(catalog: C, config: &EngineConfig) -> Self {
        Self {
            allocator: BudgetAllocator::new(AllocationPolicy::from(config)),
            ..Self::new(catalog)
        }
    }

    pub fn with_weights(mut self, weights: SynergyWeights) -> Self {
        self.scorer = SynergyScorer::new(weights);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn recommend<R: Rng + ?Sized>(
        &self,
        answers: &QuestionnaireAnswers,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<RecommendationResult, RecommendationError> {
        let profile = BuildProfile::try_from(answers)?;
        self.recommend_profile(&profile, today, rng)
    }

    pub fn recommend_profile<R: Rng + ?Sized>(
        &self,
        profile: &BuildProfile,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<RecommendationResult, RecommendationError> {
        let allocation = self.allocator.allocate(profile, &self.catalog)?;
        let mut notes = allocation.notes;
        let mut build = allocation.build;
        let mut issues = validate(&build);

        if issues
            .iter()
            .any(|issue| issue.is_critical() && issue.concerns_psu())
        {
            let draw = f64::from(build.power_draw_watts());
            let required = draw * (1.0 + PSU_SAFETY_MARGIN);
            if let Some(replacement) = psu_covering(&self.catalog, required) {
                if replacement.id != build.psu.id {
                    warn!(
                        from = %build.psu.id,
                        to = %replacement.id,
                        draw,
                        "upgrading undersized power supply"
                    );
                    notes.push(format!(
                        "Upgraded the power supply from {} to {} to cover the estimated {draw:.0} W draw",
                        build.psu.display_name(),
                        replacement.display_name()
                    ));
                    build = build.with_psu(replacement.clone());
                    issues = validate(&build);

                    let budget = profile.budget();
                    if let Some(stale) = over_budget_note(allocation.total_price, budget) {
                        notes.retain(|note| *note != stale);
                    }
                    notes.extend(over_budget_note(build.total_price(), budget));
                }
            }
        }

        let valid = issues.is_empty();
        if !valid {
            warn!(
                issues = issues.len(),
                critical = issues.iter().filter(|issue| issue.is_critical()).count(),
                "recommendation has unresolved compatibility issues"
            );
        }

        let metrics = BuildMetrics::from_build(&build);
        let synergy = self.scorer.score(&metrics);
        let grade = synergy.grade()?;
        let archetype = classify(&metrics);
        let total_price = build.total_price();

        let context = AdvisoryContext::from_metrics(&metrics, today)
            .with_total_price(total_price)
            .with_use_case(profile.purpose());
        let advisories = self
            .composer
            .compose(&synergy, grade, &metrics, &context, rng);
        let feedback = self
            .composer
            .feedback(grade, archetype, synergy.score, rng);

        info!(
            score = synergy.score,
            grade = grade.letter(),
            profile = archetype.label(),
            total_price,
            valid,
            "recommendation complete"
        );

        Ok(RecommendationResult {
            parts: build.parts_summary(),
            fulfilment: allocation.fulfilment,
            notes,
            synergy: SynergyResult {
                score: synergy.score,
                grade,
                profile: archetype.label().to_string(),
                feedback,
                ctas: advisories
                    .iter()
                    .map(|advisory| advisory.message.clone())
                    .collect(),
            },
            valid,
            issues,
            total_price,
            triggered_rules: synergy.triggered,
            advisories,
            build,
        })
    }
}
