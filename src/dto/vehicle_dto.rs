//! DTOs del catálogo de vehículos

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Filtros para búsqueda en el catálogo
///
/// Un parámetro ausente significa "sin restricción en esa dimensión".
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub category: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Request para crear un nuevo vehículo (admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,

    pub price_per_day: Decimal,

    pub image: Option<String>,

    pub available: Option<bool>,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(length(min = 1, max = 255))]
    pub location: String,
}

/// Request para actualizar un vehículo existente (admin)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    pub price_per_day: Option<Decimal>,

    pub image: Option<String>,

    pub available: Option<bool>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
}
