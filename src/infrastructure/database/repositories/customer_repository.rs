//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        name: m.name,
        phone_number: m.phone_number,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, name: &str, phone_number: &str) -> DomainResult<Customer> {
        debug!(phone_number, "Creating customer");

        let now = Utc::now();
        let model = customer::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            phone_number: Set(phone_number.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find()
            .filter(customer::Column::PhoneNumber.eq(phone_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update_name(&self, id: i32, name: &str) -> DomainResult<Customer> {
        let existing = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Customer", "id", id));
        };

        let mut active: customer::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn create_then_find_by_phone() {
        let repo = SeaOrmCustomerRepository::new(test_database().await);

        let created = repo.create("Mei", "0912-345-678").await.unwrap();
        assert!(created.id > 0);

        let found = repo.find_by_phone("0912-345-678").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Mei");
        assert!(repo.find_by_phone("0000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_phone_is_rejected() {
        let repo = SeaOrmCustomerRepository::new(test_database().await);
        repo.create("Mei", "555").await.unwrap();

        let err = repo.create("Someone Else", "555").await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn update_name_keeps_identity() {
        let repo = SeaOrmCustomerRepository::new(test_database().await);
        let created = repo.create("Mei", "555").await.unwrap();

        let updated = repo.update_name(created.id, "Mei Lin").await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Mei Lin");
        assert_eq!(updated.phone_number, "555");
    }

    #[tokio::test]
    async fn update_name_of_missing_customer_is_not_found() {
        let repo = SeaOrmCustomerRepository::new(test_database().await);
        let err = repo.update_name(99, "Ghost").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Customer", .. }));
    }
}
