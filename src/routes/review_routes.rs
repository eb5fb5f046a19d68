use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::review_controller::ReviewController;
use crate::dto::review_dto::{PublicReviewResponse, SubmitReviewRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::{admin_middleware, auth_middleware};
use crate::models::review::Review;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router(state: AppState) -> Router<AppState> {
    let submit = Router::new()
        .route("/", post(submit_review))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // La aprobación es una acción de moderación: solo admin
    let moderate = Router::new()
        .route("/approve/:id", post(approve_review))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/:vehicle_id", get(list_approved_reviews))
        .merge(submit)
        .merge(moderate)
}

async fn submit_review(
    State(state): State<AppState>,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<Json<ApiResponse<Review>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}

async fn list_approved_reviews(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<PublicReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_approved(vehicle_id).await?;
    Ok(Json(response))
}

async fn approve_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Review>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.approve(id).await?;
    Ok(Json(response))
}
