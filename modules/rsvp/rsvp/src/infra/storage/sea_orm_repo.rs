use async_trait::async_trait;
use rsvp_sdk::Rsvp;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::repo::{NewRecord, RsvpRepository, StoreError};

use super::entity::{self, Entity as RsvpEntity};

pub struct SeaOrmRsvpRepository {
    db: DatabaseConnection,
}

impl SeaOrmRsvpRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RsvpRepository for SeaOrmRsvpRepository {
    async fn find_by_normalized_name(&self, normalized_name: &str) -> anyhow::Result<Option<Rsvp>> {
        let found = RsvpEntity::find()
            .filter(entity::Column::NormalizedName.eq(normalized_name))
            .one(&self.db)
            .await?;

        Ok(found.map(Into::into))
    }

    async fn insert(&self, record: NewRecord) -> Result<Rsvp, StoreError> {
        let active_model = entity::ActiveModel {
            id: ActiveValue::Set(Uuid::now_v7()),
            display_name: ActiveValue::Set(record.display_name),
            normalized_name: ActiveValue::Set(record.normalized_name),
            attending: ActiveValue::Set(record.attending),
            created_at: ActiveValue::Set(OffsetDateTime::now_utc()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::Duplicate),
            Err(e) => Err(StoreError::Backend(e.into())),
        }
    }

    async fn list_all_desc(&self) -> anyhow::Result<Vec<Rsvp>> {
        let mut models = RsvpEntity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;

        // SQLite orders the timestamp column as text, which misplaces
        // fractional seconds within the same second.
        models.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(models.into_iter().map(Into::into).collect())
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
