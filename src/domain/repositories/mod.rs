//! Repository traits for the domain layer
//!
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::customer::CustomerRepository;
use super::reservation::ReservationRepository;
use super::restaurant::RestaurantRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let restaurant = repos.restaurants().find_by_id(1).await?;
///     let booked = repos.reservations().count_active(1, date, "18:00").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn customers(&self) -> &dyn CustomerRepository;
    fn restaurants(&self) -> &dyn RestaurantRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
