use super::common::*;

use crate::config::EngineConfig;
use crate::recommendation::allocation::AllocationError;
use crate::recommendation::compatibility::CompatibilityRule;
use crate::recommendation::facade::{RecommendationEngine, RecommendationError};
use crate::recommendation::questionnaire::ProfileError;
use crate::recommendation::synergy::{Grade, SynergyRule};

#[test]
fn golden_scenario_end_to_end() {
    let engine = RecommendationEngine::new(golden_catalog());
    let result = engine
        .recommend(&golden_answers(), today(), &mut rng(11))
        .expect("recommendation succeeds");

    assert_eq!(result.parts.cpu, "AMD Ryzen 5 7600");
    assert_eq!(result.parts.gpu, "AMD Radeon RX 7800 XT");
    assert_eq!(result.parts.memory, "G.Skill Flare X5 32GB DDR5-6000");
    assert!(result.parts.case_fans.is_none());
    assert_eq!(result.synergy.grade, Grade::B);
    assert_eq!(result.synergy.score, 83);
    assert_eq!(result.synergy.profile, "GPU-Heavy Build");
    assert!(result.valid);
    assert!(result.issues.is_empty());
    assert!((result.total_price - 1248.0).abs() < 1e-9);
    assert_eq!(result.synergy.ctas.len(), 4);
    assert_eq!(
        result.synergy.ctas,
        result
            .advisories
            .iter()
            .map(|advisory| advisory.message.clone())
            .collect::<Vec<_>>()
    );
    assert!(result
        .triggered_rules
        .iter()
        .any(|entry| entry.rule == SynergyRule::GpuCpuImbalance && entry.points == -20));
}

#[test]
fn same_profile_gives_same_build_and_grade() {
    let engine = RecommendationEngine::new(golden_catalog());
    let first = engine
        .recommend(&golden_answers(), today(), &mut rng(1))
        .expect("first run");
    let second = engine
        .recommend(&golden_answers(), today(), &mut rng(99))
        .expect("second run");

    assert_eq!(first.build, second.build);
    assert_eq!(first.synergy.grade, second.synergy.grade);
    assert_eq!(first.synergy.score, second.synergy.score);
    assert_eq!(first.notes, second.notes);
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let engine = RecommendationEngine::new(golden_catalog());
    let result = engine
        .recommend(&golden_answers(), today(), &mut rng(4))
        .expect("recommendation succeeds");

    let value = serde_json::to_value(&result).expect("serializes");
    assert_eq!(value["grade"], "B");
    assert_eq!(value["profile"], "GPU-Heavy Build");
    assert_eq!(value["fulfilment"]["priorityFlag"], false);
    assert_eq!(value["totalPrice"], 1248.0);
    assert!(value["parts"].get("caseFans").is_none());
    assert!(value["ctas"].is_array());
    assert!(value["triggeredRules"].is_array());
    assert_eq!(value["build"]["cpu"]["id"], "cpu-r5-7600");
}

#[test]
fn undersized_psu_is_swapped_for_cheapest_cover() {
    let catalog = catalog_with_psus(vec![
        psu("psu-350", 49.0, 350),
        psu("psu-850", 139.0, 850),
        psu("psu-1000", 189.0, 1000),
    ]);
    let engine = RecommendationEngine::new(catalog);
    let result = engine
        .recommend(&golden_answers(), today(), &mut rng(2))
        .expect("recommendation succeeds");

    // 390 W x 1.2 = 468 W
    assert_eq!(result.build.psu.id, "psu-850");
    assert!(result.valid);
    assert!(result.issues.is_empty());
    assert!(result
        .notes
        .iter()
        .any(|note| note.starts_with("Upgraded the power supply")));
}

#[test]
fn unresolvable_overload_is_reported_not_hidden() {
    let catalog = catalog_with_psus(vec![psu("psu-250", 39.0, 250), psu("psu-300", 49.0, 300)]);
    let engine = RecommendationEngine::new(catalog);
    let result = engine
        .recommend(&golden_answers(), today(), &mut rng(2))
        .expect("recommendation succeeds");

    assert_eq!(result.build.psu.id, "psu-300");
    assert!(!result.valid);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.rule == CompatibilityRule::PsuOverload));
}

#[test]
fn normal_issue_alone_makes_build_invalid() {
    // 390 W draw on 420 W leaves ~8% headroom, below the margin but not overloaded
    let engine = RecommendationEngine::new(catalog_with_psus(vec![psu("psu-420", 50.0, 420)]));
    let result = engine
        .recommend(&golden_answers(), today(), &mut rng(3))
        .expect("recommendation succeeds");

    assert_eq!(result.build.psu.id, "psu-420");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].rule, CompatibilityRule::PsuHeadroom);
    assert!(!result.issues[0].is_critical());
    assert!(!result.valid);
    assert_eq!(result.valid, result.issues.is_empty());
}

#[test]
fn psu_upgrade_that_breaks_budget_is_noted() {
    let catalog = catalog_with_psus(vec![psu("psu-350", 49.0, 350), psu("psu-850", 400.0, 850)]);
    let engine = RecommendationEngine::new(catalog);
    let result = engine
        .recommend(&golden_answers(), today(), &mut rng(5))
        .expect("recommendation succeeds");

    assert_eq!(result.build.psu.id, "psu-850");
    assert!((result.total_price - 1549.0).abs() < 1e-9);
    let budget_notes: Vec<&String> = result
        .notes
        .iter()
        .filter(|note| note.starts_with("Selected parts total"))
        .collect();
    assert_eq!(
        budget_notes,
        vec!["Selected parts total 1549.00, which is 49.00 over the 1500.00 budget"]
    );
}

#[test]
fn invalid_answers_fail_as_client_errors() {
    let engine = RecommendationEngine::new(golden_catalog());

    let mut answers = golden_answers();
    answers.purpose = "mining".to_string();
    let err = engine
        .recommend(&answers, today(), &mut rng(0))
        .expect_err("unknown purpose rejected");
    assert!(matches!(
        err,
        RecommendationError::Profile(ProfileError::InvalidField {
            field: "purpose",
            ..
        })
    ));
    assert!(err.is_client_error());

    let mut answers = golden_answers();
    answers.budget = 450.0;
    let err = engine
        .recommend(&answers, today(), &mut rng(0))
        .expect_err("budget too low");
    assert!(matches!(
        err,
        RecommendationError::Allocation(AllocationError::BudgetTooLow { .. })
    ));
    assert!(err.is_client_error());
}

#[test]
fn configured_surcharge_reaches_fulfilment() {
    let config = EngineConfig {
        rush_surcharge: 99.0,
        ..EngineConfig::default()
    };
    let engine = RecommendationEngine::with_config(golden_catalog(), &config);
    let mut answers = golden_answers();
    answers.timeline = "rush".to_string();

    let result = engine
        .recommend(&answers, today(), &mut rng(0))
        .expect("recommendation succeeds");
    assert!(result.fulfilment.priority_flag);
    assert_eq!(result.fulfilment.surcharge, 99.0);
}
