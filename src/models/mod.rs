//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, más las reglas puras del dominio de reservas.

pub mod booking;
pub mod review;
pub mod user;
pub mod vehicle;
