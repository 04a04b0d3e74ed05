use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DebtComparisonRequest, DebtSimulation, DebtSimulationRequest, StrategyComparison},
};
use axum::{extract::State, routing::post, Json, Router};

#[utoipa::path(
    post,
    path = "/api/v1/debts/simulate",
    request_body = DebtSimulationRequest,
    responses(
        (status = 200, body = DebtSimulation),
        (status = 400, description = "Invalid debts or extra payment"),
        (status = 422, description = "Plan does not finish within the simulation cap")
    )
)]
async fn simulate_debts(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DebtSimulationRequest>,
) -> ApiResult<Json<DebtSimulation>> {
    let include_schedule = payload.include_schedule;
    let plan = state.debt_service.simulate(payload.into())?;
    Ok(Json(DebtSimulation::from_plan(plan, include_schedule)))
}

#[utoipa::path(
    post,
    path = "/api/v1/debts/compare",
    request_body = DebtComparisonRequest,
    responses(
        (status = 200, body = StrategyComparison),
        (status = 400, description = "Invalid debts or extra payment"),
        (status = 422, description = "A strategy does not finish within the simulation cap")
    )
)]
async fn compare_debt_strategies(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DebtComparisonRequest>,
) -> ApiResult<Json<StrategyComparison>> {
    let debts = payload.debts.into_iter().map(Into::into).collect();
    let comparison = state
        .debt_service
        .compare_strategies(debts, payload.extra_monthly_payment)?;
    Ok(Json(StrategyComparison::from_comparison(
        comparison,
        payload.include_schedule,
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debts/simulate", post(simulate_debts))
        .route("/debts/compare", post(compare_debt_strategies))
}
