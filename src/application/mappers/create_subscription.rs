use anyhow::{Context, Result};

use crate::domain::{
    entities::subscriptions::SubscriptionEntity,
    value_objects::{
        enums::{providers::Provider, subscription_statuses::SubscriptionStatus},
        subscriptions::CreateSubscriptionDto,
    },
};

/// Builds a fresh, not yet persisted subscription from an already validated request.
///
/// A missing field or unknown provider at this point means validation was skipped,
/// so it is reported as an internal error rather than a user-facing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSubscriptionMapper;

impl CreateSubscriptionMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, dto: CreateSubscriptionDto) -> Result<SubscriptionEntity> {
        let user_id = dto.user_id.context("mapper: userId must be validated")?;
        let name = dto.name.context("mapper: name must be validated")?;
        let provider = Self::resolve_provider(dto.provider.as_deref())?;
        let expiration_date = dto
            .expiration_date
            .context("mapper: expirationDate must be validated")?;

        Ok(SubscriptionEntity {
            id: None,
            user_id,
            name,
            provider,
            expiration_date,
            status: SubscriptionStatus::Active,
        })
    }

    pub fn resolve_provider(raw: Option<&str>) -> Result<Provider> {
        raw.and_then(Provider::find_by_name)
            .with_context(|| format!("mapper: provider {:?} must be validated", raw))
    }
}
