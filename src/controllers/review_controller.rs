use crate::dto::review_dto::{
    ModerationReviewResponse, PublicReviewResponse, SubmitReviewRequest,
};
use crate::dto::ApiResponse;
use crate::models::booking::rental_finished;
use crate::models::review::Review;
use chrono::Utc;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::review_repository::{ModerationReviewRow, ReviewRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_not_empty;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ReviewController {
    reviews: ReviewRepository,
    bookings: BookingRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reviews: ReviewRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn submit(
        &self,
        request: SubmitReviewRequest,
    ) -> Result<ApiResponse<Review>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_not_empty(&request.comment).is_err() {
            return Err(AppError::Validation("El comentario es requerido".to_string()));
        }

        // Solo puede reseñar quien tuvo una reserva de ese vehículo ya
        // finalizada en el tiempo (end_date <= ahora)
        let now = Utc::now();
        let eligible = self
            .bookings
            .booking_end_dates(request.user_id, request.vehicle_id)
            .await?
            .into_iter()
            .any(|end_date| rental_finished(end_date, now));

        if !eligible {
            return Err(AppError::NotEligible(
                "Solo puedes reseñar una reserva ya finalizada".to_string(),
            ));
        }

        let review = self
            .reviews
            .create(
                request.user_id,
                request.vehicle_id,
                request.rating,
                request.comment,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            review,
            "Review enviada a moderación".to_string(),
        ))
    }

    pub async fn approve(&self, id: Uuid) -> Result<ApiResponse<Review>, AppError> {
        let review = self
            .reviews
            .approve(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            review,
            "Review aprobada".to_string(),
        ))
    }

    pub async fn list_approved(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<PublicReviewResponse>, AppError> {
        let rows = self.reviews.find_approved_by_vehicle(vehicle_id).await?;

        Ok(rows
            .into_iter()
            .map(|r| PublicReviewResponse {
                reviewer_name: r.reviewer_name,
                rating: r.rating,
                comment: r.comment,
            })
            .collect())
    }

    pub async fn list_all_detailed(&self) -> Result<Vec<ModerationReviewResponse>, AppError> {
        let rows = self.reviews.find_all_detailed().await?;
        Ok(rows.into_iter().map(moderation_response).collect())
    }

    pub async fn list_approved_detailed(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<ModerationReviewResponse>, AppError> {
        let rows = self
            .reviews
            .find_approved_detailed_by_vehicle(vehicle_id)
            .await?;
        Ok(rows.into_iter().map(moderation_response).collect())
    }
}

fn moderation_response(row: ModerationReviewRow) -> ModerationReviewResponse {
    ModerationReviewResponse {
        id: row.id,
        user_id: row.user_id,
        user_name: row.user_name,
        user_email: row.user_email,
        vehicle_id: row.vehicle_id,
        vehicle_make: row.vehicle_make,
        vehicle_model: row.vehicle_model,
        rating: row.rating,
        comment: row.comment,
        approved: row.approved,
        created_at: row.created_at,
    }
}
