//! HTTP REST API
//!
//! - `middleware`: per-request session context from bearer tokens
//! - `modules`: handlers and DTOs per resource
//! - `common`: response envelope, validated extractor, error mapping
//! - `router`: route table, OpenAPI document, middleware stack

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
