//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer; the store assigns the ID
    async fn create(&self, name: &str, phone_number: &str) -> DomainResult<Customer>;

    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<Option<Customer>>;

    /// Replace the display name of an existing customer
    async fn update_name(&self, id: i32, name: &str) -> DomainResult<Customer>;

    /// All customers, by ID
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;
}
