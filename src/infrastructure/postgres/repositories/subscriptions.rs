use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{
        entities::subscriptions::{
            InsertSubscriptionEntity, SubscriptionEntity, SubscriptionRow,
            UpdateSubscriptionEntity,
        },
        repositories::subscriptions::SubscriptionRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::subscriptions},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn find_all(&self) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = subscriptions::table
            .order(subscriptions::id.asc())
            .select(SubscriptionRow::as_select())
            .load::<SubscriptionRow>(&mut conn)?;

        rows.into_iter().map(SubscriptionEntity::try_from).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = subscriptions::table
            .filter(subscriptions::id.eq(id))
            .select(SubscriptionRow::as_select())
            .first::<SubscriptionRow>(&mut conn)
            .optional()?;

        row.map(SubscriptionEntity::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .order(subscriptions::id.asc())
            .select(SubscriptionRow::as_select())
            .load::<SubscriptionRow>(&mut conn)?;

        rows.into_iter().map(SubscriptionEntity::try_from).collect()
    }

    async fn insert(&self, subscription: SubscriptionEntity) -> Result<SubscriptionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = insert_into(subscriptions::table)
            .values(InsertSubscriptionEntity::from(&subscription))
            .returning(SubscriptionRow::as_returning())
            .get_result::<SubscriptionRow>(&mut conn)?;

        SubscriptionEntity::try_from(row)
    }

    async fn update(&self, subscription: SubscriptionEntity) -> Result<()> {
        let id = subscription
            .id
            .ok_or_else(|| anyhow!("cannot update a subscription that has no id"))?;
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(subscriptions::table)
            .filter(subscriptions::id.eq(id))
            .set(UpdateSubscriptionEntity::from(&subscription))
            .execute(&mut conn)?;

        if affected == 0 {
            bail!("subscription {} does not exist", id);
        }

        Ok(())
    }

    async fn upsert(&self, subscription: SubscriptionEntity) -> Result<SubscriptionEntity> {
        match subscription.id {
            Some(_) => {
                self.update(subscription.clone()).await?;
                Ok(subscription)
            }
            None => self.insert(subscription).await,
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(subscriptions::table)
            .filter(subscriptions::id.eq(id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
