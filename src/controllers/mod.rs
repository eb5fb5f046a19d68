//! Controllers
//!
//! Casos de uso del dominio: autenticación, catálogo, ciclo de vida de
//! reservas, moderación de reviews y consola de administración.

pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod review_controller;
pub mod vehicle_controller;
