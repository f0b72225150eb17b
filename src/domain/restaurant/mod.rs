//! Restaurant aggregate

pub mod model;
pub mod repository;

pub use model::{NewRestaurant, Restaurant};
pub use repository::RestaurantRepository;
