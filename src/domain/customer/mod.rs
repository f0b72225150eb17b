//! Customer aggregate
//!
//! Customers are identified by phone number; there is no password.

pub mod model;
pub mod repository;

pub use model::Customer;
pub use repository::CustomerRepository;
