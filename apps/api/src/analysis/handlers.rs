use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::models::{
    AnalysisResponse, AnalyzeRequest, DeleteResponse, HistoryResponse, SaveResponse,
    SkillAnalysisCreate, SkillAnalysisRow,
};
use crate::analysis::skill_match::{run_analysis, SkillReport};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::roadmap;
use crate::roadmap::export::render_report_html;
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 10;
const MAX_HISTORY_LIMIT: i64 = 100;

/// Analysis result plus the roadmap outline pre-parsed for the tree view.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: SkillReport,
    pub roadmap_outline: roadmap::Roadmap,
}

/// POST /api/skill-analysis/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".to_string()));
    }
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description must not be empty".to_string(),
        ));
    }

    let report = run_analysis(&req.resume_text, &req.job_description, &state.llm).await?;
    let roadmap_outline = roadmap::parse(&report.roadmap);
    Ok(Json(AnalyzeResponse {
        report,
        roadmap_outline,
    }))
}

/// POST /api/skill-analysis
pub async fn handle_save(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SkillAnalysisCreate>,
) -> Result<Json<SaveResponse>, AppError> {
    let analysis_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO skill_analyses
            (user_id, resume_text, job_description, matched_skills,
             missing_skills, extra_skills, match_percentage, roadmap)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(&user.user_id)
    .bind(&req.resume_text)
    .bind(&req.job_description)
    .bind(&req.matched_skills)
    .bind(&req.missing_skills)
    .bind(&req.extra_skills)
    .bind(req.match_percentage)
    .bind(&req.roadmap)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(SaveResponse {
        success: true,
        analysis_id,
        message: "Analysis saved successfully".to_string(),
    }))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// GET /api/skill-analysis/history
pub async fn handle_history(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let analyses: Vec<SkillAnalysisRow> = sqlx::query_as(
        "SELECT * FROM skill_analyses WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(&user.user_id)
    .bind(limit)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(HistoryResponse {
        success: true,
        count: analyses.len(),
        analyses,
    }))
}

async fn fetch_owned_analysis(
    state: &AppState,
    id: Uuid,
    user_id: &str,
) -> Result<SkillAnalysisRow, AppError> {
    let analysis: Option<SkillAnalysisRow> =
        sqlx::query_as("SELECT * FROM skill_analyses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;

    analysis.ok_or_else(|| AppError::NotFound("Analysis not found".to_string()))
}

/// GET /api/skill-analysis/:id
pub async fn handle_get(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let analysis = fetch_owned_analysis(&state, id, &user.user_id).await?;
    Ok(Json(AnalysisResponse {
        success: true,
        analysis,
    }))
}

/// GET /api/skill-analysis/:id/report
/// Serves the standalone HTML report for a saved analysis; the user prints it
/// to PDF from the browser.
pub async fn handle_report(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let analysis = fetch_owned_analysis(&state, id, &user.user_id).await?;
    let report = SkillReport {
        matched: analysis.matched_skills,
        missing: analysis.missing_skills,
        extra: analysis.extra_skills,
        match_percentage: analysis.match_percentage,
        roadmap: analysis.roadmap.unwrap_or_default(),
    };
    Ok(Html(render_report_html(&report)))
}

/// DELETE /api/skill-analysis/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let result = sqlx::query("DELETE FROM skill_analyses WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(&user.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Analysis not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "Analysis deleted successfully".to_string(),
    }))
}
