use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::subscriptions::SubscriptionEntity;

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    async fn find_all(&self) -> Result<Vec<SubscriptionEntity>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<SubscriptionEntity>>;

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<SubscriptionEntity>>;

    /// Stores a new record and returns it with its assigned id.
    async fn insert(&self, subscription: SubscriptionEntity) -> Result<SubscriptionEntity>;

    /// Overwrites the stored record with the same id. Fails when no such row exists.
    async fn update(&self, subscription: SubscriptionEntity) -> Result<()>;

    /// Updates when `id` is set, inserts otherwise.
    async fn upsert(&self, subscription: SubscriptionEntity) -> Result<SubscriptionEntity>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
