use cogniscreen_core::models::assessment::{
    Assessment, AssessmentResults, AttentionResult, MemoryResult, SpeechResult,
};
use cogniscreen_core::models::user::User;
use cogniscreen_core::scoring::{evaluate, RiskLevel};
use cogniscreen_report::content::{build_report, recommendation_for, DISCLAIMER, TITLE};

fn sample_user() -> User {
    User::new(
        "pat@example.com".to_string(),
        "Pat Example".to_string(),
        "en".to_string(),
        "$argon2id$irrelevant".to_string(),
    )
}

fn sample_assessment(user: &User, results: AssessmentResults) -> Assessment {
    let (score, level) = evaluate(&results).unwrap();
    Assessment::new(user.id.clone(), results, score, level)
}

#[test]
fn patient_block_identifies_the_patient() {
    let user = sample_user();
    let assessment = sample_assessment(&user, AssessmentResults::default());
    let report = build_report(&assessment, &user);

    assert_eq!(report.title, TITLE);
    assert_eq!(report.disclaimer, DISCLAIMER);
    assert_eq!(report.patient.name, "Pat Example");
    assert_eq!(report.patient.email, "pat@example.com");
    assert!(!report.patient.test_date.is_empty());
}

#[test]
fn assessment_id_is_truncated_to_eight_chars() {
    let user = sample_user();
    let assessment = sample_assessment(&user, AssessmentResults::default());
    let report = build_report(&assessment, &user);

    assert_eq!(report.patient.assessment_id.len(), 8 + 3);
    assert!(report.patient.assessment_id.ends_with("..."));
    assert!(assessment.id.starts_with(&report.patient.assessment_id[..8]));
}

#[test]
fn absent_domains_produce_no_rows() {
    let user = sample_user();
    let results = AssessmentResults {
        memory: Some(MemoryResult {
            accuracy: Some(80.0),
            correct: Some(8),
            total: Some(10),
            ..Default::default()
        }),
        ..Default::default()
    };
    let assessment = sample_assessment(&user, results);
    let report = build_report(&assessment, &user);

    assert_eq!(report.detail_rows.len(), 1);
    assert_eq!(report.detail_rows[0].domain, "Memory Recall");
    assert_eq!(report.detail_rows[0].metric, "80%");
    assert_eq!(report.detail_rows[0].detail, "8/10 correct");
}

#[test]
fn rows_follow_domain_order() {
    let user = sample_user();
    let results = AssessmentResults {
        memory: Some(MemoryResult {
            accuracy: Some(90.0),
            ..Default::default()
        }),
        attention: Some(AttentionResult {
            accuracy: Some(85.0),
            hits: Some(17),
            false_alarms: Some(2),
            ..Default::default()
        }),
        speech: Some(SpeechResult {
            duration_secs: Some(30.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let assessment = sample_assessment(&user, results);
    let report = build_report(&assessment, &user);

    let domains: Vec<&str> = report.detail_rows.iter().map(|r| r.domain).collect();
    assert_eq!(
        domains,
        vec!["Memory Recall", "Attention & Focus", "Speech Analysis"]
    );
    assert_eq!(report.detail_rows[1].detail, "17 hits, 2 false alarms");
}

#[test]
fn overall_score_is_rounded_integer() {
    let user = sample_user();
    let results = AssessmentResults {
        memory: Some(MemoryResult {
            accuracy: Some(85.5),
            ..Default::default()
        }),
        attention: Some(AttentionResult {
            accuracy: Some(90.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let assessment = sample_assessment(&user, results);
    let report = build_report(&assessment, &user);

    // 87.75 rounds to 88.
    assert_eq!(report.overall_score, 88);
    assert_eq!(report.risk_level, RiskLevel::Low);
}

#[test]
fn recommendation_matches_tier() {
    assert!(recommendation_for(RiskLevel::Low).contains("within normal ranges"));
    assert!(recommendation_for(RiskLevel::Moderate).contains("comprehensive evaluation"));
    assert!(recommendation_for(RiskLevel::High).contains("as soon as possible"));

    let user = sample_user();
    let assessment = sample_assessment(&user, AssessmentResults::default());
    let report = build_report(&assessment, &user);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.recommendation, recommendation_for(RiskLevel::High));
}
