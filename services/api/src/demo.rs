use crate::infra::{load_catalog, InMemoryRecommendationRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rigsmith::config::AppConfig;
use rigsmith::error::AppError;
use rigsmith::recommendation::{
    BuildSessionService, ComponentCatalog, QuestionnaireAnswers, RecommendationEngine,
    RecommendationRepository, RecommendationResult,
};
use rigsmith::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Total budget for the build
    #[arg(long)]
    pub(crate) budget: f64,
    /// gaming, streaming, creative, workstation or general
    #[arg(long, default_value = "gaming")]
    pub(crate) purpose: String,
    /// entry, balanced, high or maximum
    #[arg(long, default_value = "balanced")]
    pub(crate) performance_ambition: String,
    /// gpu, cpu, memory, storage or balanced
    #[arg(long, default_value = "balanced")]
    pub(crate) priority_component: String,
    /// minimal, rgb_moderate or rgb_maximal
    #[arg(long, default_value = "rgb_moderate")]
    pub(crate) aesthetics: String,
    /// flexible, standard or rush
    #[arg(long, default_value = "standard")]
    pub(crate) timeline: String,
    /// CSV catalog to use instead of the configured or built-in one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Date used for market timing advice (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seed for advisory wording; the same seed reproduces the same text
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the full result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn answers(&self) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            purpose: self.purpose.clone(),
            budget: self.budget,
            performance_ambition: self.performance_ambition.clone(),
            priority_component: self.priority_component.clone(),
            aesthetics: self.aesthetics.clone(),
            timeline: self.timeline.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date used for market timing advice (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the stored session payload for each sample
    #[arg(long)]
    pub(crate) show_payload: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;

    let catalog_path = args.catalog.clone().or(config.engine.catalog_path.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;
    let engine = RecommendationEngine::with_config(catalog, &config.engine);

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let result = engine.recommend(&args.answers(), today, &mut rng)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{json}");
    } else {
        render_recommendation(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let engine = Arc::new(RecommendationEngine::new(ComponentCatalog::reference()));
    let repository = Arc::new(InMemoryRecommendationRepository::default());
    let service = BuildSessionService::new(engine, repository.clone());

    println!("Build recommendation demo ({today})");
    for answers in sample_questionnaires() {
        println!(
            "\n== {} build, budget ${:.0}, {} ambition ==",
            answers.purpose, answers.budget, answers.performance_ambition
        );
        let record = match service.submit_on(&answers, today) {
            Ok(record) => record,
            Err(err) => {
                println!("  Submission rejected: {err}");
                continue;
            }
        };
        println!("Session {}", record.session_id.0);
        render_recommendation(&record.result);

        if args.show_payload {
            match repository.fetch(&record.session_id) {
                Ok(Some(stored)) => match serde_json::to_string_pretty(&stored.session_view()) {
                    Ok(json) => println!("Stored session payload:\n{json}"),
                    Err(err) => println!("Stored session payload unavailable: {err}"),
                },
                Ok(None) => println!("Repository lookup returned no record"),
                Err(err) => println!("Repository unavailable: {err}"),
            }
        }
    }

    Ok(())
}

fn sample_questionnaires() -> Vec<QuestionnaireAnswers> {
    let answers = |purpose: &str, budget: f64, ambition: &str, priority: &str, look: &str| {
        QuestionnaireAnswers {
            purpose: purpose.to_string(),
            budget,
            performance_ambition: ambition.to_string(),
            priority_component: priority.to_string(),
            aesthetics: look.to_string(),
            timeline: "standard".to_string(),
        }
    };

    vec![
        answers("gaming", 1200.0, "balanced", "gpu", "rgb_moderate"),
        answers("streaming", 2000.0, "high", "cpu", "rgb_maximal"),
        answers("workstation", 3500.0, "maximum", "memory", "minimal"),
        // below the supported minimum, shows the rejection path
        answers("general", 450.0, "entry", "balanced", "minimal"),
    ]
}

pub(crate) fn render_recommendation(result: &RecommendationResult) {
    let synergy = &result.synergy;
    println!(
        "Grade {} ({}/100) | {} | total ${:.2}",
        synergy.grade.letter(),
        synergy.score,
        synergy.profile,
        result.total_price
    );
    if result.fulfilment.priority_flag {
        println!(
            "Rush fulfilment: +${:.2} surcharge",
            result.fulfilment.surcharge
        );
    }

    let parts = &result.parts;
    println!("Parts:");
    println!("  - CPU: {}", parts.cpu);
    println!("  - GPU: {}", parts.gpu);
    println!("  - Motherboard: {}", parts.motherboard);
    println!("  - Memory: {}", parts.memory);
    println!("  - Storage: {}", parts.storage);
    println!("  - Cooling: {}", parts.cooling);
    println!("  - Power supply: {}", parts.psu);
    println!("  - Case: {}", parts.case);
    if let Some(fans) = &parts.case_fans {
        println!("  - Case fans: {fans}");
    }

    if result.issues.is_empty() {
        println!("Compatibility: no issues found");
    } else {
        println!(
            "Compatibility: {} issue(s), build is not valid",
            result.issues.len()
        );
        for issue in &result.issues {
            println!("  - [{}] {}", issue.rule.label(), issue.message);
        }
    }

    if !result.triggered_rules.is_empty() {
        println!("Synergy rules:");
        for rule in &result.triggered_rules {
            println!("  - {:+} {}: {}", rule.points, rule.rule.label(), rule.detail);
        }
    }

    for note in &result.notes {
        println!("Note: {note}");
    }

    println!("Feedback: {}", synergy.feedback);
    if !synergy.ctas.is_empty() {
        println!("Advice:");
        for cta in &synergy.ctas {
            println!("  - {cta}");
        }
    }
}
