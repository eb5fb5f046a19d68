//! Routers de la API
//!
//! Un router por recurso, ensamblados en `create_app_router`.

pub mod admin_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod review_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Ensamblar el router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);

    Router::new()
        .route("/", get(health))
        .route("/test", get(test_endpoint))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/bookings", booking_routes::create_booking_router(state.clone()))
        .nest("/api/reviews", review_routes::create_review_router(state.clone()))
        .nest("/api/admin", admin_routes::create_admin_router(state.clone()))
        .layer(cors)
        .with_state(state)
}

/// Health check
async fn health() -> &'static str {
    "Vehicle Rental Backend is Running"
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API de alquiler de vehículos funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
