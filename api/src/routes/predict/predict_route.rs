//! POST /predict — runs the two-stage QA pipeline for one question.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use qa_pipeline::answer_question;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::predict::predict_request::{PredictRequest, PredictResponse},
};

/// Handler: POST /predict
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/predict \
///   -H 'content-type: application/json' \
///   -d '{"question":"Tôi muốn tìm khách sạn 4 saoở Đà Lạt với rating là 4.0"}'
/// ```
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: PredictRequest,
) -> AppResult<Json<PredictResponse>> {
    let outcome = answer_question(
        state.svc.clone(),
        &state.store,
        &state.pipeline_cfg,
        &body.question,
    )
    .await?;

    info!(matched = outcome.matched, "prediction served");

    Ok(Json(PredictResponse {
        answer: outcome.answer,
        status_code: 200,
    }))
}
