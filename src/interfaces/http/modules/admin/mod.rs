//! Admin views over the raw tables

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
