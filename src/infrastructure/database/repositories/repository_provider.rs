//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    CustomerRepository, RepositoryProvider, ReservationRepository, RestaurantRepository,
};

use super::customer_repository::SeaOrmCustomerRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::restaurant_repository::SeaOrmRestaurantRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    customers: SeaOrmCustomerRepository,
    restaurants: SeaOrmRestaurantRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            customers: SeaOrmCustomerRepository::new(db.clone()),
            restaurants: SeaOrmRestaurantRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn restaurants(&self) -> &dyn RestaurantRepository {
        &self.restaurants
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}
