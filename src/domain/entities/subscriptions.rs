use anyhow::{Error, Result, anyhow};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::value_objects::enums::{
        providers::Provider, subscription_statuses::SubscriptionStatus,
    },
    infrastructure::postgres::schema::subscriptions,
};

/// A user's time-bound subscription to a provider.
///
/// `id` stays `None` until the record has been inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionEntity {
    pub id: Option<i32>,
    pub user_id: i32,
    pub name: String,
    pub provider: Provider,
    pub expiration_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
}

impl SubscriptionEntity {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscriptions)]
pub struct SubscriptionRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct InsertSubscriptionEntity {
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = subscriptions)]
pub struct UpdateSubscriptionEntity {
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

impl TryFrom<SubscriptionRow> for SubscriptionEntity {
    type Error = Error;

    fn try_from(value: SubscriptionRow) -> Result<Self> {
        let provider = value
            .provider
            .parse::<Provider>()
            .map_err(|err| anyhow!("subscription {}: {}", value.id, err))?;
        let status = value
            .status
            .parse::<SubscriptionStatus>()
            .map_err(|err| anyhow!("subscription {}: {}", value.id, err))?;

        Ok(Self {
            id: Some(value.id),
            user_id: value.user_id,
            name: value.name,
            provider,
            expiration_date: value.expiration_date,
            status,
        })
    }
}

impl From<&SubscriptionEntity> for InsertSubscriptionEntity {
    fn from(value: &SubscriptionEntity) -> Self {
        Self {
            user_id: value.user_id,
            name: value.name.clone(),
            provider: value.provider.to_string(),
            expiration_date: value.expiration_date,
            status: value.status.to_string(),
        }
    }
}

impl From<&SubscriptionEntity> for UpdateSubscriptionEntity {
    fn from(value: &SubscriptionEntity) -> Self {
        Self {
            user_id: value.user_id,
            name: value.name.clone(),
            provider: value.provider.to_string(),
            expiration_date: value.expiration_date,
            status: value.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(provider: &str, status: &str) -> SubscriptionRow {
        SubscriptionRow {
            id: 7,
            user_id: 1,
            name: "premium".to_string(),
            provider: provider.to_string(),
            expiration_date: Utc::now(),
            status: status.to_string(),
        }
    }

    #[test]
    fn row_converts_into_entity() {
        let row = sample_row("google", "canceled");
        let expiration_date = row.expiration_date;

        let entity = SubscriptionEntity::try_from(row).unwrap();

        assert_eq!(entity.id, Some(7));
        assert_eq!(entity.provider, Provider::Google);
        assert_eq!(entity.status, SubscriptionStatus::Canceled);
        assert_eq!(entity.expiration_date, expiration_date);
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        let result = SubscriptionEntity::try_from(sample_row("apple", "paused"));

        assert!(result.is_err());
    }

    #[test]
    fn insert_row_uses_stored_representation() {
        let entity = SubscriptionEntity::try_from(sample_row("APPLE", "ACTIVE")).unwrap();

        let insert = InsertSubscriptionEntity::from(&entity);

        assert_eq!(insert.provider, "apple");
        assert_eq!(insert.status, "active");
    }
}
