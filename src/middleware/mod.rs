//! Middleware HTTP
//!
//! Guard de autenticación/rol y configuración de CORS.

pub mod auth;
pub mod cors;
