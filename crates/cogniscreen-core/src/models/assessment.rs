use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::scoring::RiskLevel;
use crate::time;

/// One completed screening session. Created once on save, never mutated or
/// deleted. `overall_score` and `risk_level` are computed by the scoring
/// engine at save time, not supplied by the client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: String,
    pub user_id: String,
    #[serde(with = "time::timestamp")]
    #[ts(type = "string")]
    pub test_date: Timestamp,
    pub results: AssessmentResults,
    pub overall_score: f64,
    pub risk_level: RiskLevel,
}

impl Assessment {
    pub fn new(
        user_id: String,
        results: AssessmentResults,
        overall_score: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            test_date: Timestamp::now(),
            results,
            overall_score,
            risk_level,
        }
    }
}

/// Per-domain test metrics. Each domain is optional — an absent domain was
/// simply not taken in that session. Only `memory.accuracy`,
/// `attention.accuracy` and `reaction.score` feed the overall score; the
/// remaining fields are informational.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention: Option<AttentionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<ReactionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechResult>,
}

/// Word-recall test: `accuracy` is the percentage of items recalled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MemoryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

/// Sustained-attention test: `accuracy` is the hit percentage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttentionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub false_alarms: Option<u32>,
}

/// Reaction-time test: `score` is a normalized percentage, the timings are
/// raw milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReactionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_time_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_ms: Option<f64>,
}

/// Speech sample: informational only, excluded from scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeechResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<serde_json::Value>,
}
