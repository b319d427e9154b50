use crate::analysis::{MetricsInput, TrendView};
use crate::charts::CanvasTarget;
use crate::errors::AppError;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ChartSnapshot, DailySample, ResetResponse, TrendQuery,
};
use crate::state::{AppState, Controller};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let input = MetricsInput::from_request(&payload);
    let mut controller = state.controller.lock().await;
    let analysis = controller.analyze(input).await?;

    Ok(Json(AnalyzeResponse {
        analysis,
        charts: snapshots(&controller),
    }))
}

pub async fn sample(State(state): State<AppState>) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut controller = state.controller.lock().await;
    let analysis = controller.analyze_sample().await?;

    Ok(Json(AnalyzeResponse {
        analysis,
        charts: snapshots(&controller),
    }))
}

pub async fn trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<ChartSnapshot>, AppError> {
    let view = TrendView::parse_lenient(query.view.as_deref());
    let mut controller = state.controller.lock().await;
    let snapshot = controller.show_trend(view).await?.clone();
    Ok(Json(snapshot))
}

pub async fn charts(State(state): State<AppState>) -> Json<Vec<ChartSnapshot>> {
    let controller = state.controller.lock().await;
    Json(snapshots(&controller))
}

pub async fn history(
    State(state): State<AppState>,
) -> Result<Json<Option<Vec<DailySample>>>, AppError> {
    let controller = state.controller.lock().await;
    Ok(Json(controller.history().load().await?))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>, AppError> {
    let mut controller = state.controller.lock().await;
    let message = controller.reset().await?;

    Ok(Json(ResetResponse {
        message,
        trend: controller.charts().current(CanvasTarget::Trend).cloned(),
    }))
}

fn snapshots(controller: &Controller) -> Vec<ChartSnapshot> {
    controller
        .charts()
        .handles()
        .map(|(_, snapshot)| snapshot.clone())
        .collect()
}
