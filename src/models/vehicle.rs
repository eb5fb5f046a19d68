//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del catálogo de alquiler.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: Decimal,
    pub image: Option<String>,
    pub available: bool,
    pub category: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}
