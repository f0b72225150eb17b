//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::{
    DomainError, DomainResult, NewReservation, Reservation, ReservationDetails,
    ReservationRepository, ReservationStatus,
};
use crate::infrastructure::database::entities::{reservation, restaurant};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        customer_id: m.customer_id,
        restaurant_id: m.restaurant_id,
        reservation_date: m.reservation_date,
        reservation_time: m.reservation_time,
        party_size: m.party_size,
        status: ReservationStatus::from_stored(&m.status),
        created_at: m.created_at,
    }
}

fn details(m: reservation::Model, r: restaurant::Model) -> ReservationDetails {
    ReservationDetails {
        id: m.id,
        restaurant_name: r.name,
        reservation_date: m.reservation_date,
        reservation_time: m.reservation_time,
        party_size: m.party_size,
        status: ReservationStatus::from_stored(&m.status),
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!(
            customer_id = r.customer_id,
            restaurant_id = r.restaurant_id,
            date = %r.reservation_date,
            time = %r.reservation_time,
            "Saving reservation"
        );

        let model = reservation::ActiveModel {
            id: NotSet,
            customer_id: Set(r.customer_id),
            restaurant_id: Set(r.restaurant_id),
            reservation_date: Set(r.reservation_date),
            reservation_time: Set(r.reservation_time),
            party_size: Set(r.party_size),
            status: Set(ReservationStatus::Confirmed.as_str().to_string()),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Vec<ReservationDetails>> {
        let rows = reservation::Entity::find()
            .find_also_related(restaurant::Entity)
            .filter(reservation::Column::CustomerId.eq(customer_id))
            .order_by_desc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        // Inner-join semantics: rows whose restaurant is gone are skipped
        Ok(rows
            .into_iter()
            .filter_map(|(m, r)| r.map(|r| details(m, r)))
            .collect())
    }

    async fn count_active(
        &self,
        restaurant_id: i32,
        date: NaiveDate,
        time: &str,
    ) -> DomainResult<u64> {
        reservation::Entity::find()
            .filter(reservation::Column::RestaurantId.eq(restaurant_id))
            .filter(reservation::Column::ReservationDate.eq(date))
            .filter(reservation::Column::ReservationTime.eq(time))
            .filter(reservation::Column::Status.ne(ReservationStatus::Cancelled.as_str()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()> {
        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Reservation", "id", id));
        };

        let mut active: reservation::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerRepository, NewRestaurant, RestaurantRepository};
    use crate::infrastructure::database::repositories::customer_repository::SeaOrmCustomerRepository;
    use crate::infrastructure::database::repositories::restaurant_repository::SeaOrmRestaurantRepository;
    use crate::infrastructure::database::test_database;

    struct Fixture {
        repo: SeaOrmReservationRepository,
        customer_id: i32,
        restaurant_id: i32,
    }

    async fn fixture() -> Fixture {
        let db = test_database().await;
        let customer = SeaOrmCustomerRepository::new(db.clone())
            .create("Ana", "600-100")
            .await
            .unwrap();
        let restaurant = SeaOrmRestaurantRepository::new(db.clone())
            .create(NewRestaurant {
                name: "Casa Luz".into(),
                address: None,
                total_tables: 2,
                open_time: "12:00".into(),
                close_time: "23:00".into(),
            })
            .await
            .unwrap();
        Fixture {
            repo: SeaOrmReservationRepository::new(db),
            customer_id: customer.id,
            restaurant_id: restaurant.id,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2031, 1, 10).unwrap()
    }

    fn booking(f: &Fixture, time: &str) -> NewReservation {
        NewReservation {
            customer_id: f.customer_id,
            restaurant_id: f.restaurant_id,
            reservation_date: date(),
            reservation_time: time.into(),
            party_size: 2,
        }
    }

    #[tokio::test]
    async fn created_reservation_is_confirmed() {
        let f = fixture().await;
        let r = f.repo.create(booking(&f, "19:00")).await.unwrap();

        assert_eq!(r.status, ReservationStatus::Confirmed);
        let stored = f.repo.find_by_id(r.id).await.unwrap().unwrap();
        assert_eq!(stored.reservation_time, "19:00");
        assert_eq!(stored.reservation_date, date());
        assert_eq!(stored.party_size, 2);
    }

    #[tokio::test]
    async fn count_active_is_per_slot_and_ignores_cancelled() {
        let f = fixture().await;
        let first = f.repo.create(booking(&f, "19:00")).await.unwrap();
        f.repo.create(booking(&f, "19:00")).await.unwrap();
        f.repo.create(booking(&f, "20:00")).await.unwrap();

        let count = f.repo.count_active(f.restaurant_id, date(), "19:00").await.unwrap();
        assert_eq!(count, 2);

        f.repo
            .update_status(first.id, ReservationStatus::Cancelled)
            .await
            .unwrap();
        let count = f.repo.count_active(f.restaurant_id, date(), "19:00").await.unwrap();
        assert_eq!(count, 1);

        let other_day = date().succ_opt().unwrap();
        let count = f.repo.count_active(f.restaurant_id, other_day, "19:00").await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn customer_listing_is_newest_first_with_restaurant_name() {
        let f = fixture().await;
        let a = f.repo.create(booking(&f, "18:00")).await.unwrap();
        let b = f.repo.create(booking(&f, "21:00")).await.unwrap();

        let listed = f.repo.find_for_customer(f.customer_id).await.unwrap();
        let ids: Vec<i32> = listed.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
        assert!(listed.iter().all(|d| d.restaurant_name == "Casa Luz"));

        assert!(f.repo.find_for_customer(f.customer_id + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn updating_missing_reservation_is_not_found() {
        let f = fixture().await;
        let err = f
            .repo
            .update_status(404, ReservationStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Reservation", .. }));
    }
}
