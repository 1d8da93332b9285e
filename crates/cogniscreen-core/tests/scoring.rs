use cogniscreen_core::models::assessment::{
    AssessmentResults, AttentionResult, MemoryResult, ReactionResult, SpeechResult,
};
use cogniscreen_core::scoring::{classify, evaluate, overall_score, validate, RiskLevel};

fn memory(accuracy: f64) -> Option<MemoryResult> {
    Some(MemoryResult {
        accuracy: Some(accuracy),
        ..Default::default()
    })
}

fn attention(accuracy: f64) -> Option<AttentionResult> {
    Some(AttentionResult {
        accuracy: Some(accuracy),
        ..Default::default()
    })
}

#[test]
fn mean_of_present_metrics() {
    let results = AssessmentResults {
        memory: memory(85.5),
        attention: attention(90.0),
        ..Default::default()
    };
    assert_eq!(overall_score(&results), 87.75);
    assert_eq!(classify(overall_score(&results)), RiskLevel::Low);
}

#[test]
fn empty_results_score_zero_high_risk() {
    let results = AssessmentResults::default();
    assert_eq!(overall_score(&results), 0.0);
    assert_eq!(classify(0.0), RiskLevel::High);
}

#[test]
fn all_three_metrics_averaged() {
    let results = AssessmentResults {
        memory: memory(60.0),
        attention: attention(70.0),
        reaction: Some(ReactionResult {
            score: Some(80.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(overall_score(&results), 70.0);
}

#[test]
fn boundaries_belong_to_higher_band() {
    assert_eq!(classify(75.0), RiskLevel::Low);
    assert_eq!(classify(74.999), RiskLevel::Moderate);
    assert_eq!(classify(50.0), RiskLevel::Moderate);
    assert_eq!(classify(49.999), RiskLevel::High);
}

#[test]
fn informational_fields_do_not_affect_score() {
    let results = AssessmentResults {
        memory: Some(MemoryResult {
            accuracy: Some(80.0),
            score: Some(12.0),
            correct: Some(8),
            total: Some(10),
        }),
        reaction: Some(ReactionResult {
            score: None,
            avg_time_ms: Some(450.0),
            best_time_ms: Some(310.0),
        }),
        speech: Some(SpeechResult {
            duration_secs: Some(30.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    // Only memory.accuracy is a scored metric here.
    assert_eq!(overall_score(&results), 80.0);
}

#[test]
fn out_of_range_metric_rejected() {
    let too_high = AssessmentResults {
        memory: memory(120.0),
        ..Default::default()
    };
    assert!(validate(&too_high).is_err());

    let negative = AssessmentResults {
        attention: attention(-5.0),
        ..Default::default()
    };
    assert!(validate(&negative).is_err());
}

#[test]
fn evaluate_scores_and_classifies() {
    let results = AssessmentResults {
        memory: memory(40.0),
        attention: attention(50.0),
        ..Default::default()
    };
    let (score, level) = evaluate(&results).unwrap();
    assert_eq!(score, 45.0);
    assert_eq!(level, RiskLevel::High);
}

#[test]
fn risk_level_serializes_as_capitalized_word() {
    assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"Low\"");
    assert_eq!(
        serde_json::to_string(&RiskLevel::Moderate).unwrap(),
        "\"Moderate\""
    );
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
}
