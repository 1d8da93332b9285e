//! The report content contract: which sections appear and in what order.
//!
//! Everything here is pure assembly from the assessment and user records —
//! the PDF layer only decides typography. Detail rows exist only for domains
//! actually present in the results; absent domains are omitted, not blanked.

use jiff::tz::TimeZone;
use jiff::Timestamp;

use cogniscreen_core::models::assessment::Assessment;
use cogniscreen_core::models::user::User;
use cogniscreen_core::scoring::RiskLevel;

pub const TITLE: &str = "Cognitive Assessment Report";

pub const DISCLAIMER: &str = "IMPORTANT MEDICAL DISCLAIMER: This assessment is a \
screening tool only and does NOT constitute a medical diagnosis. Results should \
be discussed with a qualified healthcare professional. Early detection and \
professional evaluation are essential for proper care.";

pub const FOOTER_PLATFORM: &str =
    "Platform: Cognitive Screening Platform - AI-Powered Early Dementia Detection";

pub const FOOTER_CONFIDENTIAL: &str = "This report is confidential and intended \
for the named patient and their healthcare providers only.";

const RECOMMENDATION_LOW: &str = "Your cognitive performance is within normal \
ranges across all tested areas. Continue maintaining a healthy lifestyle with \
regular mental and physical activities. Consider scheduling regular assessments \
(every 6-12 months) to track your cognitive health over time.";

const RECOMMENDATION_MODERATE: &str = "Your results show some areas that could \
benefit from attention. We recommend consulting with a healthcare professional \
for a comprehensive evaluation. Engaging in cognitive exercises, maintaining \
social connections, and regular physical activity can help support cognitive \
function. Consider lifestyle modifications including adequate sleep, stress \
management, and a balanced diet.";

const RECOMMENDATION_HIGH: &str = "We recommend consulting with a healthcare \
professional as soon as possible for a thorough cognitive assessment. Early \
intervention and professional guidance can make a significant difference in \
managing cognitive health concerns. Please schedule an appointment with a \
neurologist or geriatrician for further evaluation and personalized care \
recommendations.";

/// Fully assembled report, sections in render order.
#[derive(Debug)]
pub struct ReportContent {
    pub title: &'static str,
    pub disclaimer: &'static str,
    pub patient: PatientBlock,
    /// Rounded integer out of 100.
    pub overall_score: i64,
    pub risk_level: RiskLevel,
    pub detail_rows: Vec<DetailRow>,
    pub recommendation: &'static str,
    pub generated_at: String,
}

#[derive(Debug)]
pub struct PatientBlock {
    pub name: String,
    pub email: String,
    pub test_date: String,
    /// First 8 characters of the assessment id, ellipsized.
    pub assessment_id: String,
}

/// One row of the detailed results table.
#[derive(Debug)]
pub struct DetailRow {
    pub domain: &'static str,
    pub metric: String,
    pub detail: String,
}

pub fn recommendation_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => RECOMMENDATION_LOW,
        RiskLevel::Moderate => RECOMMENDATION_MODERATE,
        RiskLevel::High => RECOMMENDATION_HIGH,
    }
}

fn format_date(ts: Timestamp) -> String {
    ts.to_zoned(TimeZone::UTC)
        .strftime("%B %d, %Y at %I:%M %p")
        .to_string()
}

fn truncated_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

pub fn build_report(assessment: &Assessment, user: &User) -> ReportContent {
    let results = &assessment.results;
    let mut detail_rows = Vec::new();

    if let Some(memory) = &results.memory {
        detail_rows.push(DetailRow {
            domain: "Memory Recall",
            metric: memory
                .accuracy
                .map(|a| format!("{}%", a.round() as i64))
                .unwrap_or_else(|| "-".to_string()),
            detail: format!(
                "{}/{} correct",
                memory.correct.unwrap_or(0),
                memory.total.unwrap_or(0)
            ),
        });
    }

    if let Some(attention) = &results.attention {
        detail_rows.push(DetailRow {
            domain: "Attention & Focus",
            metric: attention
                .accuracy
                .map(|a| format!("{}%", a.round() as i64))
                .unwrap_or_else(|| "-".to_string()),
            detail: format!(
                "{} hits, {} false alarms",
                attention.hits.unwrap_or(0),
                attention.false_alarms.unwrap_or(0)
            ),
        });
    }

    if let Some(reaction) = &results.reaction {
        detail_rows.push(DetailRow {
            domain: "Reaction Time",
            metric: reaction
                .avg_time_ms
                .map(|t| format!("{}ms", t.round() as i64))
                .unwrap_or_else(|| "-".to_string()),
            detail: format!(
                "Best: {}ms",
                reaction.best_time_ms.unwrap_or(0.0).round() as i64
            ),
        });
    }

    if let Some(speech) = &results.speech {
        detail_rows.push(DetailRow {
            domain: "Speech Analysis",
            metric: format!("{}s", speech.duration_secs.unwrap_or(0.0)),
            detail: "Recording captured for analysis".to_string(),
        });
    }

    ReportContent {
        title: TITLE,
        disclaimer: DISCLAIMER,
        patient: PatientBlock {
            name: user.name.clone(),
            email: user.email.clone(),
            test_date: format_date(assessment.test_date),
            assessment_id: truncated_id(&assessment.id),
        },
        overall_score: assessment.overall_score.round() as i64,
        risk_level: assessment.risk_level,
        detail_rows,
        recommendation: recommendation_for(assessment.risk_level),
        generated_at: format!("{} UTC", format_date(Timestamp::now())),
    }
}
