//! Modelo de Review
//!
//! Este módulo contiene el struct Review del flujo de moderación.
//! Toda review nace con approved = false; solo un admin la aprueba.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rango permitido de rating
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Review principal - mapea exactamente a la tabla reviews
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}
