//! HTTP feature modules, one per resource

use std::sync::Arc;

use crate::application::BookingService;

pub mod admin;
pub mod auth;
pub mod availability;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod reservations;
pub mod restaurants;

/// State shared by every booking route
#[derive(Clone)]
pub struct BookingState {
    pub service: Arc<BookingService>,
}
