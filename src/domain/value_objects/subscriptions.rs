use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::subscriptions::SubscriptionEntity,
    value_objects::enums::{providers::Provider, subscription_statuses::SubscriptionStatus},
};

/// Raw create/renew request. Nothing here is trusted until it has been validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionDto {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub provider: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub id: Option<i32>,
    pub user_id: i32,
    pub name: String,
    pub provider: Provider,
    pub expiration_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
}

impl From<SubscriptionEntity> for SubscriptionDto {
    fn from(value: SubscriptionEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            provider: value.provider,
            expiration_date: value.expiration_date,
            status: value.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsFilter {
    pub user_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_accepts_missing_fields() {
        let dto: CreateSubscriptionDto = serde_json::from_value(json!({
            "name": "premium",
            "provider": "Google"
        }))
        .unwrap();

        assert_eq!(dto.user_id, None);
        assert_eq!(dto.name.as_deref(), Some("premium"));
        assert_eq!(dto.provider.as_deref(), Some("Google"));
        assert_eq!(dto.expiration_date, None);
    }

    #[test]
    fn response_serializes_enums_in_upper_case() {
        let expiration_date = Utc::now();
        let dto = SubscriptionDto::from(SubscriptionEntity {
            id: Some(3),
            user_id: 1,
            name: "premium".to_string(),
            provider: Provider::Apple,
            expiration_date,
            status: SubscriptionStatus::Canceled,
        });

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["id"], json!(3));
        assert_eq!(value["userId"], json!(1));
        assert_eq!(value["provider"], json!("APPLE"));
        assert_eq!(value["status"], json!("CANCELED"));
    }
}
