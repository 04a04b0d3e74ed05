use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{
        GoalProjection, GoalProjectionRequest, RequiredContributionRequest,
        RequiredContributionResponse,
    },
};
use axum::{extract::State, routing::post, Json, Router};

#[utoipa::path(
    post,
    path = "/api/v1/goals/projection",
    request_body = GoalProjectionRequest,
    responses(
        (status = 200, body = GoalProjection),
        (status = 400, description = "Invalid goal amounts"),
        (status = 422, description = "Target not reached within the simulation cap")
    )
)]
async fn project_goal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GoalProjectionRequest>,
) -> ApiResult<Json<GoalProjection>> {
    let projection = state.goal_service.project(payload.into())?;
    Ok(Json(GoalProjection::from(projection)))
}

#[utoipa::path(
    post,
    path = "/api/v1/goals/required-contribution",
    request_body = RequiredContributionRequest,
    responses(
        (status = 200, body = RequiredContributionResponse),
        (status = 400, description = "Invalid goal amounts or horizon")
    )
)]
async fn required_contribution(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RequiredContributionRequest>,
) -> ApiResult<Json<RequiredContributionResponse>> {
    let monthly_contribution = state.goal_service.required_contribution(payload.into())?;
    Ok(Json(RequiredContributionResponse {
        monthly_contribution,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/projection", post(project_goal))
        .route("/goals/required-contribution", post(required_contribution))
}
