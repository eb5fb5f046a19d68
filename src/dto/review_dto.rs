//! DTOs del flujo de reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para enviar una review
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1))]
    pub comment: String,
}

/// Proyección pública de una review aprobada
///
/// Oculta el email del autor y los identificadores crudos.
#[derive(Debug, Serialize)]
pub struct PublicReviewResponse {
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
}

/// Review con referencias completas para el panel de administración
#[derive(Debug, Serialize)]
pub struct ModerationReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub vehicle_id: Uuid,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}
