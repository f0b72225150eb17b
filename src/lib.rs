//! # Table Booking
//!
//! Restaurant table reservations: customers identify by phone number,
//! browse restaurants, check hourly availability and book or cancel tables.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits and the availability engine
//! - **application**: booking use cases
//! - **infrastructure**: SeaORM persistence and session tokens
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, clock, graceful shutdown
//! - **config** / **server**: TOML configuration and server lifecycle

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
