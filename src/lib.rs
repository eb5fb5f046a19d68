//! Backend de alquiler de vehículos
//!
//! La lógica de dominio (reservas, moderación de reviews, guard de
//! acceso) vive en controllers/repositories y es invocable sin pasar
//! por la capa HTTP.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
