use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted analysis, scoped to the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillAnalysisRow {
    pub id: Uuid,
    pub user_id: String,
    pub resume_text: String,
    pub job_description: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub match_percentage: f64,
    pub roadmap: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/skill-analysis. The `user_id` comes from the verified
/// token, never from the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillAnalysisCreate {
    pub resume_text: String,
    pub job_description: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub match_percentage: f64,
    pub roadmap: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub analysis_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub count: usize,
    pub analyses: Vec<SkillAnalysisRow>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: SkillAnalysisRow,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
