use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::controllers::booking_controller::BookingController;
use crate::controllers::review_controller::ReviewController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::booking_dto::{BookingDetailResponse, UpdateBookingStatusRequest};
use crate::dto::review_dto::ModerationReviewResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::dto::ApiResponse;
use crate::middleware::auth::{admin_middleware, auth_middleware};
use crate::models::booking::Booking;
use crate::models::review::Review;
use crate::models::user::UserResponse;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Consola de administración completa bajo un único guard AdminOnly
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/:id", put(update_vehicle).delete(delete_vehicle))
        .route("/vehicles/:id/approve", post(approve_vehicle))
        .route("/vehicles/:id/reject", post(reject_vehicle))
        .route("/bookings", get(list_bookings))
        .route("/bookings/:id/status", put(update_booking_status))
        .route("/reviews", get(list_reviews))
        .route("/reviews/:id/approve", post(approve_review))
        .route("/reviews/vehicle/:vehicle_id", get(approved_reviews_for_vehicle))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.list_users().await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(VehicleFilters::default()).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn approve_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.approve(id).await?;
    Ok(Json(response))
}

async fn reject_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.reject(id).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingDetailResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<Booking>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModerationReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_all_detailed().await?;
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

async fn approved_reviews_for_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<ModerationReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_approved_detailed(vehicle_id).await?;
    Ok(Json(response))
}
