use cogniscreen_core::models::assessment::{Assessment, AssessmentResults, MemoryResult};
use cogniscreen_core::models::user::User;
use cogniscreen_core::scoring::evaluate;
use cogniscreen_report::{content::build_report, pdf};

#[test]
fn render_produces_a_pdf_byte_stream() {
    let user = User::new(
        "pat@example.com".to_string(),
        "Pat Example".to_string(),
        "en".to_string(),
        "$argon2id$irrelevant".to_string(),
    );
    let results = AssessmentResults {
        memory: Some(MemoryResult {
            accuracy: Some(80.0),
            correct: Some(8),
            total: Some(10),
            ..Default::default()
        }),
        ..Default::default()
    };
    let (score, level) = evaluate(&results).unwrap();
    let assessment = Assessment::new(user.id.clone(), results, score, level);

    let bytes = pdf::render(&build_report(&assessment, &user)).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}
