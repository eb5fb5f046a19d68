use crate::dto::booking_dto::{
    BookingDetailResponse, CreateBookingRequest, RentalHistoryEntry, UpdateBookingStatusRequest,
};
use crate::dto::ApiResponse;
use crate::models::booking::{can_cancel, duration_days, Booking, BOOKING_STATUSES};
use crate::models::user::UserResponse;
use crate::models::vehicle::Vehicle;
use crate::repositories::booking_repository::{BookingDetailRow, BookingRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_enum, validate_positive};
use futures::TryStreamExt;
use sqlx::PgPool;
use uuid::Uuid;

pub struct BookingController {
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        if validate_positive(request.days).is_err() {
            return Err(AppError::Validation(
                "La cantidad de días debe ser al menos 1".to_string(),
            ));
        }

        let booking = self
            .repository
            .create(request.user_id, request.vehicle_id, request.days)
            .await?;

        Ok(ApiResponse::success_with_message(
            booking,
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<BookingDetailResponse>, AppError> {
        let rows = self.repository.find_all_detailed().await?;
        Ok(rows.into_iter().map(detail_response).collect())
    }

    pub async fn cancel(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if !can_cancel(&booking.status) {
            return Err(AppError::InvalidState(
                "No se puede cancelar una reserva completada".to_string(),
            ));
        }

        // Borrado físico: no hay soft-cancel ni lógica de reembolso
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only("Reserva cancelada".to_string()))
    }

    /// Marca la reserva como pagada sin mirar su estado actual
    pub async fn pay(&self, id: Uuid) -> Result<BookingDetailResponse, AppError> {
        self.repository
            .set_paid(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let row = self
            .repository
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(detail_response(row))
    }

    pub async fn rental_history(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<RentalHistoryEntry>, AppError> {
        let mut rows = self.repository.rental_history(vehicle_id);

        let mut history = Vec::new();
        while let Some(row) = rows.try_next().await? {
            history.push(RentalHistoryEntry {
                id: row.id,
                user_name: row.user_name,
                user_email: row.user_email,
                start_date: row.start_date,
                end_date: row.end_date,
                duration_days: duration_days(row.start_date, row.end_date),
                total_price: row.total_price,
                status: row.status,
            });
        }

        Ok(history)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<Booking, AppError> {
        if validate_enum(request.status.as_str(), &BOOKING_STATUSES).is_err() {
            return Err(AppError::Validation(format!(
                "Estado desconocido: {}",
                request.status
            )));
        }

        self.repository
            .update_status(id, &request.status)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))
    }
}

fn detail_response(row: BookingDetailRow) -> BookingDetailResponse {
    // Las columnas del LEFT JOIN vienen NULL si la referencia quedó huérfana
    let user = match (row.user_name, row.user_email, row.user_role, row.user_created_at) {
        (Some(name), Some(email), Some(role), Some(created_at)) => Some(UserResponse {
            id: row.user_id,
            name,
            email,
            role,
            created_at,
        }),
        _ => None,
    };

    let vehicle = match (
        row.vehicle_make,
        row.vehicle_model,
        row.vehicle_year,
        row.price_per_day,
        row.vehicle_available,
        row.vehicle_category,
        row.vehicle_location,
        row.vehicle_created_at,
    ) {
        (
            Some(make),
            Some(model),
            Some(year),
            Some(price_per_day),
            Some(available),
            Some(category),
            Some(location),
            Some(created_at),
        ) => Some(Vehicle {
            id: row.vehicle_id,
            make,
            model,
            year,
            price_per_day,
            image: row.vehicle_image,
            available,
            category,
            location,
            created_at,
        }),
        _ => None,
    };

    BookingDetailResponse {
        id: row.id,
        start_date: row.start_date,
        end_date: row.end_date,
        total_price: row.total_price,
        paid: row.paid,
        status: row.status,
        created_at: row.created_at,
        user,
        vehicle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn row_base() -> BookingDetailRow {
        let now = Utc::now();
        BookingDetailRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            start_date: now,
            end_date: now,
            total_price: Decimal::from(150),
            paid: false,
            status: "booked".to_string(),
            created_at: now,
            user_name: Some("Ana".to_string()),
            user_email: Some("ana@example.com".to_string()),
            user_role: Some("user".to_string()),
            user_created_at: Some(now),
            vehicle_make: Some("Toyota".to_string()),
            vehicle_model: Some("Corolla".to_string()),
            vehicle_year: Some(2020),
            price_per_day: Some(Decimal::from(50)),
            vehicle_image: None,
            vehicle_available: Some(true),
            vehicle_category: Some("sedan".to_string()),
            vehicle_location: Some("Madrid".to_string()),
            vehicle_created_at: Some(now),
        }
    }

    #[test]
    fn test_detail_response_resolves_references() {
        let response = detail_response(row_base());
        assert_eq!(response.user.unwrap().name, "Ana");
        assert_eq!(response.vehicle.unwrap().make, "Toyota");
    }

    #[test]
    fn test_detail_response_keeps_orphaned_booking() {
        // El vehículo fue borrado después de crear la reserva: la reserva
        // se devuelve igual, con la referencia en null
        let mut row = row_base();
        row.vehicle_make = None;
        row.vehicle_model = None;
        row.vehicle_year = None;
        row.price_per_day = None;
        row.vehicle_available = None;
        row.vehicle_category = None;
        row.vehicle_location = None;
        row.vehicle_created_at = None;

        let response = detail_response(row);
        assert!(response.vehicle.is_none());
        assert!(response.user.is_some());
        assert_eq!(response.total_price, Decimal::from(150));
    }
}
