//! Atrium Visitor Management System
//!
//! A Rust REST API server for visitor management: visitors pre-register for
//! a visit and receive a QR-encoded visitor ID, staff approve or decline
//! appointments, and the security desk checks visitors in and out.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
