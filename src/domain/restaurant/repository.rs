//! Restaurant repository interface

use async_trait::async_trait;

use super::model::{NewRestaurant, Restaurant};
use crate::domain::DomainResult;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn create(&self, restaurant: NewRestaurant) -> DomainResult<Restaurant>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Restaurant>>;

    /// All restaurants, by ID
    async fn find_all(&self) -> DomainResult<Vec<Restaurant>>;
}
