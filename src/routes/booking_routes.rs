use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingDetailResponse, CreateBookingRequest, RentalHistoryEntry};
use crate::dto::ApiResponse;
use crate::middleware::auth::auth_middleware;
use crate::models::booking::Booking;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router(state: AppState) -> Router<AppState> {
    // El historial es público; el resto requiere principal autenticado
    let protected = Router::new()
        .route("/", post(create_booking).get(list_bookings))
        .route("/cancel/:id", delete(cancel_booking))
        .route("/pay/:id", post(pay_booking))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/history/:vehicle_id", get(rental_history))
        .merge(protected)
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingDetailResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.cancel(id).await?;
    Ok(Json(response))
}

async fn pay_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingDetailResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.pay(id).await?;
    Ok(Json(response))
}

async fn rental_history(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<RentalHistoryEntry>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.rental_history(vehicle_id).await?;
    Ok(Json(response))
}
