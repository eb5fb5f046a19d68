//! Acceso al store de entidades
//!
//! Un repositorio por colección: User, Vehicle, Booking, Review.
//! Toda consulta SQL del sistema vive en esta capa.

pub mod booking_repository;
pub mod review_repository;
pub mod user_repository;
pub mod vehicle_repository;
