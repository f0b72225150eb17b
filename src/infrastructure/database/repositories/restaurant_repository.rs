//! SeaORM implementation of RestaurantRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, NewRestaurant, Restaurant, RestaurantRepository};
use crate::infrastructure::database::entities::restaurant;

pub struct SeaOrmRestaurantRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: restaurant::Model) -> Restaurant {
    Restaurant {
        id: m.id,
        name: m.name,
        address: m.address,
        total_tables: m.total_tables,
        open_time: m.open_time,
        close_time: m.close_time,
        created_at: m.created_at,
    }
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn create(&self, r: NewRestaurant) -> DomainResult<Restaurant> {
        debug!(name = %r.name, "Creating restaurant");

        let model = restaurant::ActiveModel {
            id: NotSet,
            name: Set(r.name),
            address: Set(r.address),
            total_tables: Set(r.total_tables),
            open_time: Set(r.open_time),
            close_time: Set(r.close_time),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Restaurant>> {
        let model = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Restaurant>> {
        let models = restaurant::Entity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
