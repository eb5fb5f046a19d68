//! DTOs del ciclo de vida de reservas

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{user::UserResponse, vehicle::Vehicle};

/// Request para crear una reserva
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub days: i64,
}

/// Request para actualizar el estado de una reserva (admin)
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

/// Response de reserva con usuario y vehículo resueltos
///
/// user/vehicle van en null si la referencia quedó huérfana (el store no
/// tiene integridad referencial).
#[derive(Debug, Serialize)]
pub struct BookingDetailResponse {
    pub id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub paid: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserResponse>,
    pub vehicle: Option<Vehicle>,
}

/// Entrada del historial de alquileres de un vehículo
#[derive(Debug, Serialize)]
pub struct RentalHistoryEntry {
    pub id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_days: i64,
    pub total_price: Decimal,
    pub status: String,
}
