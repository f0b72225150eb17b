//! Booking use cases
//!
//! HTTP handlers stay thin and delegate here. Identity is passed in
//! explicitly; the service never looks at request state.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{
    compute_slots, Customer, DomainError, DomainResult, NewReservation, NewRestaurant,
    RepositoryProvider, Reservation, ReservationDetails, Restaurant, Slot,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::shared::errors::InfraError;
use crate::shared::time::Clock;

/// Returned after a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub customer: Customer,
}

/// A booking request for one hourly slot
#[derive(Debug, Clone)]
pub struct ReserveCommand {
    pub restaurant_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub party_size: i32,
}

/// Full contents of every table, for the admin view
#[derive(Debug, Clone)]
pub struct AdminTables {
    pub customers: Vec<Customer>,
    pub restaurants: Vec<Restaurant>,
    pub reservations: Vec<Reservation>,
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    clock: Arc<dyn Clock>,
    jwt_config: JwtConfig,
}

impl BookingService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        clock: Arc<dyn Clock>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            repos,
            clock,
            jwt_config,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Identity ────────────────────────────────────────────────

    /// Identify a customer by phone number.
    ///
    /// A known phone keeps its customer ID and takes the new name; an
    /// unknown phone registers a new customer.
    pub async fn login(&self, name: &str, phone: &str) -> DomainResult<LoginResult> {
        let customers = self.repos.customers();

        let customer = match customers.find_by_phone(phone).await? {
            Some(existing) => {
                debug!(customer_id = existing.id, "Returning customer");
                customers.update_name(existing.id, name).await?
            }
            None => {
                let created = customers.create(name, phone).await?;
                info!(customer_id = created.id, "New customer registered");
                created
            }
        };

        let token = create_token(customer.id, &customer.name, &self.jwt_config)
            .map_err(|e| DomainError::from(InfraError::from(e)))?;

        Ok(LoginResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            customer,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_restaurants(&self) -> DomainResult<Vec<Restaurant>> {
        self.repos.restaurants().find_all().await
    }

    /// Bookable hourly slots for a restaurant on `date`.
    /// An unknown restaurant has no slots.
    pub async fn time_slots(&self, restaurant_id: i32, date: NaiveDate) -> DomainResult<Vec<Slot>> {
        let Some(restaurant) = self.repos.restaurants().find_by_id(restaurant_id).await? else {
            debug!(restaurant_id, "Time slots requested for unknown restaurant");
            return Ok(Vec::new());
        };

        let reservations = self.repos.reservations();
        compute_slots(&restaurant, date, self.clock.now(), |time| async move {
            reservations.count_active(restaurant_id, date, &time).await
        })
        .await
    }

    /// A customer's reservations, newest first
    pub async fn my_reservations(&self, customer_id: i32) -> DomainResult<Vec<ReservationDetails>> {
        self.repos.reservations().find_for_customer(customer_id).await
    }

    pub async fn admin_tables(&self) -> DomainResult<AdminTables> {
        Ok(AdminTables {
            customers: self.repos.customers().find_all().await?,
            restaurants: self.repos.restaurants().find_all().await?,
            reservations: self.repos.reservations().find_all().await?,
        })
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Book a slot for `customer_id`.
    ///
    /// The capacity check and the insert are separate statements, so two
    /// concurrent bookings for the last table can both succeed.
    ///
    /// `cmd.time` is stored as given (trimmed only). It counts toward a slot
    /// only when it equals that slot's `"HH:00"` label, so `"9:00"` never
    /// fills the `"09:00"` slot.
    pub async fn reserve(&self, customer_id: i32, cmd: ReserveCommand) -> DomainResult<Reservation> {
        let time = cmd.time.trim().to_string();

        let restaurant = self
            .repos
            .restaurants()
            .find_by_id(cmd.restaurant_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant", "id", cmd.restaurant_id))?;

        let booked = self
            .repos
            .reservations()
            .count_active(restaurant.id, cmd.date, &time)
            .await?;
        if restaurant.is_full_at(booked) {
            warn!(
                restaurant_id = restaurant.id,
                date = %cmd.date,
                time = %time,
                booked,
                "Slot is fully booked"
            );
            return Err(DomainError::SlotFull {
                date: cmd.date.to_string(),
                time,
            });
        }

        let reservation = self
            .repos
            .reservations()
            .create(NewReservation {
                customer_id,
                restaurant_id: restaurant.id,
                reservation_date: cmd.date,
                reservation_time: time,
                party_size: cmd.party_size,
            })
            .await?;

        metrics::counter!("reservations_created_total").increment(1);
        info!(
            reservation_id = reservation.id,
            customer_id,
            restaurant_id = restaurant.id,
            "Reservation confirmed"
        );
        Ok(reservation)
    }

    /// Cancel a reservation by ID. Any logged-in customer may cancel any
    /// reservation; cancelling twice is a no-op.
    pub async fn cancel(&self, customer_id: i32, reservation_id: i32) -> DomainResult<()> {
        let reservations = self.repos.reservations();
        let mut reservation = reservations
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", reservation_id))?;

        if !reservation.is_active() {
            debug!(reservation_id, customer_id, "Reservation already cancelled");
            return Ok(());
        }

        reservation.cancel();
        reservations
            .update_status(reservation.id, reservation.status)
            .await?;

        metrics::counter!("reservations_cancelled_total").increment(1);
        info!(reservation_id, customer_id, "Reservation cancelled");
        Ok(())
    }

    pub async fn create_restaurant(&self, restaurant: NewRestaurant) -> DomainResult<Restaurant> {
        if restaurant.name.trim().is_empty() {
            return Err(DomainError::Validation("Restaurant name is required".into()));
        }
        if restaurant.total_tables < 1 {
            return Err(DomainError::Validation(
                "total_tables must be at least 1".into(),
            ));
        }

        let created = self.repos.restaurants().create(restaurant).await?;
        info!(restaurant_id = created.id, name = %created.name, "Restaurant created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReservationStatus;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_database;
    use crate::shared::time::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, 15).unwrap()
    }

    async fn service_at(hour: u32) -> BookingService {
        let db = test_database().await;
        BookingService::new(
            Arc::new(SeaOrmRepositoryProvider::new(db)),
            Arc::new(FixedClock::at(today(), hour, 30)),
            JwtConfig::default(),
        )
    }

    async fn add_restaurant(svc: &BookingService, tables: i32) -> Restaurant {
        svc.create_restaurant(NewRestaurant {
            name: "Harbor Grill".into(),
            address: Some("1 Pier Road".into()),
            total_tables: tables,
            open_time: "09:00".into(),
            close_time: "17:00".into(),
        })
        .await
        .unwrap()
    }

    fn command(restaurant_id: i32, date: NaiveDate, time: &str) -> ReserveCommand {
        ReserveCommand {
            restaurant_id,
            date,
            time: time.into(),
            party_size: 2,
        }
    }

    #[tokio::test]
    async fn login_reuses_customer_by_phone_and_updates_name() {
        let svc = service_at(10).await;

        let first = svc.login("Ana", "555-0101").await.unwrap();
        let second = svc.login("Ana Maria", "555-0101").await.unwrap();

        assert_eq!(first.customer.id, second.customer.id);
        assert_eq!(second.customer.name, "Ana Maria");
        assert_eq!(second.token_type, "Bearer");

        let claims = verify_token(&second.token, svc.jwt_config()).unwrap();
        assert_eq!(claims.customer_id(), Some(second.customer.id));
        assert_eq!(claims.name, "Ana Maria");

        let other = svc.login("Ben", "555-0202").await.unwrap();
        assert_ne!(other.customer.id, first.customer.id);
    }

    #[tokio::test]
    async fn time_slots_for_unknown_restaurant_are_empty() {
        let svc = service_at(10).await;
        let slots = svc.time_slots(99, today()).await.unwrap();
        assert!(slots.is_empty());
    }

    #[tokio::test]
    async fn time_slots_today_start_after_current_hour() {
        let svc = service_at(12).await;
        let r = add_restaurant(&svc, 3).await;

        let times: Vec<String> = svc
            .time_slots(r.id, today())
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.time)
            .collect();
        assert_eq!(times, vec!["13:00", "14:00", "15:00", "16:00"]);
    }

    #[tokio::test]
    async fn slot_becomes_full_at_capacity_and_frees_on_cancel() {
        let svc = service_at(10).await;
        let r = add_restaurant(&svc, 1).await;
        let customer = svc.login("Ana", "555-0101").await.unwrap().customer;
        let tomorrow = today().succ_opt().unwrap();

        let booked = svc
            .reserve(customer.id, command(r.id, tomorrow, "10:00"))
            .await
            .unwrap();
        assert_eq!(booked.status, ReservationStatus::Confirmed);

        let slots = svc.time_slots(r.id, tomorrow).await.unwrap();
        let ten = slots.iter().find(|s| s.time == "10:00").unwrap();
        assert!(ten.is_full);
        assert!(slots.iter().filter(|s| s.time != "10:00").all(|s| !s.is_full));

        svc.cancel(customer.id, booked.id).await.unwrap();
        let slots = svc.time_slots(r.id, tomorrow).await.unwrap();
        assert!(slots.iter().all(|s| !s.is_full));
    }

    #[tokio::test]
    async fn reserve_rejects_full_slot() {
        let svc = service_at(10).await;
        let r = add_restaurant(&svc, 1).await;
        let ana = svc.login("Ana", "555-0101").await.unwrap().customer;
        let ben = svc.login("Ben", "555-0202").await.unwrap().customer;
        let tomorrow = today().succ_opt().unwrap();

        svc.reserve(ana.id, command(r.id, tomorrow, "11:00")).await.unwrap();
        let err = svc
            .reserve(ben.id, command(r.id, tomorrow, "11:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotFull { .. }));
    }

    #[tokio::test]
    async fn only_exact_slot_labels_count_toward_capacity() {
        let svc = service_at(10).await;
        let r = add_restaurant(&svc, 1).await;
        let ana = svc.login("Ana", "555-0101").await.unwrap().customer;
        let tomorrow = today().succ_opt().unwrap();

        svc.reserve(ana.id, command(r.id, tomorrow, "9:00")).await.unwrap();
        let slots = svc.time_slots(r.id, tomorrow).await.unwrap();
        assert!(slots.iter().all(|s| !s.is_full));

        svc.reserve(ana.id, command(r.id, tomorrow, " 09:00 ")).await.unwrap();
        let slots = svc.time_slots(r.id, tomorrow).await.unwrap();
        let nine = slots.iter().find(|s| s.time == "09:00").unwrap();
        assert!(nine.is_full);

        let err = svc
            .reserve(ana.id, command(r.id, tomorrow, "09:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotFull { ref time, .. } if time == "09:00"));
    }

    #[tokio::test]
    async fn cancelling_twice_is_a_no_op() {
        let svc = service_at(10).await;
        let r = add_restaurant(&svc, 2).await;
        let ana = svc.login("Ana", "555-0101").await.unwrap().customer;
        let res = svc
            .reserve(ana.id, command(r.id, today(), "15:00"))
            .await
            .unwrap();

        svc.cancel(ana.id, res.id).await.unwrap();
        svc.cancel(ana.id, res.id).await.unwrap();

        let tables = svc.admin_tables().await.unwrap();
        assert_eq!(tables.reservations[0].status, ReservationStatus::Cancelled);
    }

    #[tokio::test]
    async fn reserve_unknown_restaurant_is_not_found() {
        let svc = service_at(10).await;
        let err = svc.reserve(1, command(42, today(), "15:00")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Restaurant", .. }));
    }

    #[tokio::test]
    async fn my_reservations_lists_only_own_newest_first() {
        let svc = service_at(10).await;
        let r = add_restaurant(&svc, 5).await;
        let ana = svc.login("Ana", "555-0101").await.unwrap().customer;
        let ben = svc.login("Ben", "555-0202").await.unwrap().customer;
        let day = today().succ_opt().unwrap();

        let a1 = svc.reserve(ana.id, command(r.id, day, "12:00")).await.unwrap();
        svc.reserve(ben.id, command(r.id, day, "12:00")).await.unwrap();
        let a2 = svc.reserve(ana.id, command(r.id, day, "14:00")).await.unwrap();

        let mine = svc.my_reservations(ana.id).await.unwrap();
        let ids: Vec<i32> = mine.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![a2.id, a1.id]);
        assert_eq!(mine[0].restaurant_name, "Harbor Grill");
    }

    #[tokio::test]
    async fn cancel_missing_reservation_is_not_found() {
        let svc = service_at(10).await;
        let err = svc.cancel(1, 77).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn create_restaurant_validates_input() {
        let svc = service_at(10).await;
        let err = svc
            .create_restaurant(NewRestaurant {
                name: "  ".into(),
                address: None,
                total_tables: 3,
                open_time: "11:00".into(),
                close_time: "22:00".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc
            .create_restaurant(NewRestaurant {
                name: "Tiny".into(),
                address: None,
                total_tables: 0,
                open_time: "11:00".into(),
                close_time: "22:00".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn admin_tables_returns_every_row() {
        let svc = service_at(10).await;
        let r = add_restaurant(&svc, 2).await;
        let ana = svc.login("Ana", "555-0101").await.unwrap().customer;
        let res = svc
            .reserve(ana.id, command(r.id, today(), "16:00"))
            .await
            .unwrap();
        svc.cancel(ana.id, res.id).await.unwrap();

        let tables = svc.admin_tables().await.unwrap();
        assert_eq!(tables.customers.len(), 1);
        assert_eq!(tables.restaurants.len(), 1);
        assert_eq!(tables.reservations.len(), 1);
        assert_eq!(tables.reservations[0].status, ReservationStatus::Cancelled);
    }
}
