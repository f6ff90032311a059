use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    application::{
        mappers::create_subscription::CreateSubscriptionMapper,
        validators::create_subscription::CreateSubscriptionValidator,
    },
    domain::{
        clock::Clock,
        entities::subscriptions::SubscriptionEntity,
        repositories::subscriptions::SubscriptionRepository,
        value_objects::{
            enums::subscription_statuses::SubscriptionStatus,
            subscriptions::CreateSubscriptionDto, validation::ValidationResult,
        },
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("validation failed: {0}")]
    Validation(ValidationResult),
    #[error("subscription {0} not found")]
    NotFound(i32),
    #[error("subscription is not active")]
    NotActive { id: i32, status: SubscriptionStatus },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubscriptionError::NotFound(_) => StatusCode::NOT_FOUND,
            SubscriptionError::NotActive { .. } => StatusCode::CONFLICT,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionUseCase<T, C>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    subscription_repository: Arc<T>,
    validator: Arc<CreateSubscriptionValidator>,
    mapper: Arc<CreateSubscriptionMapper>,
    clock: Arc<C>,
}

impl<T, C> SubscriptionUseCase<T, C>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    pub fn new(
        subscription_repository: Arc<T>,
        validator: Arc<CreateSubscriptionValidator>,
        mapper: Arc<CreateSubscriptionMapper>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            subscription_repository,
            validator,
            mapper,
            clock,
        }
    }

    /// Renews the user's subscription with the same name, or creates a new one.
    ///
    /// The first record returned for the user whose name matches exactly is reused,
    /// whatever its status, so a canceled or expired subscription comes back as active.
    pub async fn upsert(&self, dto: CreateSubscriptionDto) -> UseCaseResult<SubscriptionEntity> {
        let validation = self.validator.validate(&dto, self.clock.now());
        if validation.has_errors() {
            warn!(
                user_id = ?dto.user_id,
                codes = ?validation.codes(),
                "subscriptions: upsert rejected by validation"
            );
            return Err(SubscriptionError::Validation(validation));
        }

        let user_id = dto.user_id.ok_or_else(|| {
            SubscriptionError::Internal(anyhow::anyhow!("validated request is missing userId"))
        })?;

        let existing = self
            .subscription_repository
            .find_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(
                    user_id,
                    db_error = ?err,
                    "subscriptions: failed to load user subscriptions"
                );
                SubscriptionError::Internal(err)
            })?;

        let matched = existing
            .into_iter()
            .find(|subscription| dto.name.as_deref() == Some(subscription.name.as_str()));

        let subscription = match matched {
            Some(mut subscription) => {
                info!(
                    user_id,
                    subscription_id = ?subscription.id,
                    previous_status = %subscription.status,
                    "subscriptions: renewing existing subscription"
                );
                subscription.provider =
                    CreateSubscriptionMapper::resolve_provider(dto.provider.as_deref())?;
                subscription.expiration_date = dto.expiration_date.ok_or_else(|| {
                    SubscriptionError::Internal(anyhow::anyhow!(
                        "validated request is missing expirationDate"
                    ))
                })?;
                subscription.status = SubscriptionStatus::Active;
                subscription
            }
            None => {
                info!(user_id, "subscriptions: creating new subscription");
                self.mapper.map(dto)?
            }
        };

        let persisted = self
            .subscription_repository
            .upsert(subscription)
            .await
            .map_err(|err| {
                error!(
                    user_id,
                    db_error = ?err,
                    "subscriptions: failed to persist subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            user_id,
            subscription_id = ?persisted.id,
            "subscriptions: subscription upserted"
        );
        Ok(persisted)
    }

    pub async fn cancel(&self, id: i32) -> UseCaseResult<SubscriptionEntity> {
        let mut subscription = self.find_active(id, "cancel").await?;

        subscription.status = SubscriptionStatus::Canceled;
        self.update(id, subscription, "cancel").await
    }

    pub async fn expire(&self, id: i32) -> UseCaseResult<SubscriptionEntity> {
        let mut subscription = self.find_active(id, "expire").await?;

        subscription.status = SubscriptionStatus::Expired;
        subscription.expiration_date = self.clock.now();
        self.update(id, subscription, "expire").await
    }

    pub async fn get(&self, id: i32) -> UseCaseResult<SubscriptionEntity> {
        self.find(id).await?.ok_or_else(|| {
            warn!(subscription_id = id, "subscriptions: subscription not found");
            SubscriptionError::NotFound(id)
        })
    }

    pub async fn list(&self, user_id: Option<i32>) -> UseCaseResult<Vec<SubscriptionEntity>> {
        let result = match user_id {
            Some(user_id) => self.subscription_repository.find_by_user_id(user_id).await,
            None => self.subscription_repository.find_all().await,
        };

        let subscriptions = result.map_err(|err| {
            error!(
                user_id = ?user_id,
                db_error = ?err,
                "subscriptions: failed to list subscriptions"
            );
            SubscriptionError::Internal(err)
        })?;

        info!(
            user_id = ?user_id,
            count = subscriptions.len(),
            "subscriptions: subscriptions listed"
        );
        Ok(subscriptions)
    }

    pub async fn delete(&self, id: i32) -> UseCaseResult<()> {
        let deleted = self
            .subscription_repository
            .delete(id)
            .await
            .map_err(|err| {
                error!(
                    subscription_id = id,
                    db_error = ?err,
                    "subscriptions: failed to delete subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        if !deleted {
            warn!(subscription_id = id, "subscriptions: nothing to delete");
            return Err(SubscriptionError::NotFound(id));
        }

        info!(subscription_id = id, "subscriptions: subscription deleted");
        Ok(())
    }

    async fn find(&self, id: i32) -> UseCaseResult<Option<SubscriptionEntity>> {
        self.subscription_repository
            .find_by_id(id)
            .await
            .map_err(|err| {
                error!(
                    subscription_id = id,
                    db_error = ?err,
                    "subscriptions: failed to load subscription"
                );
                SubscriptionError::Internal(err)
            })
    }

    async fn find_active(&self, id: i32, action: &str) -> UseCaseResult<SubscriptionEntity> {
        let subscription = self.get(id).await?;

        if !subscription.is_active() {
            warn!(
                subscription_id = id,
                status = %subscription.status,
                action,
                "subscriptions: transition rejected, subscription is not active"
            );
            return Err(SubscriptionError::NotActive {
                id,
                status: subscription.status,
            });
        }

        Ok(subscription)
    }

    async fn update(
        &self,
        id: i32,
        subscription: SubscriptionEntity,
        action: &str,
    ) -> UseCaseResult<SubscriptionEntity> {
        self.subscription_repository
            .update(subscription.clone())
            .await
            .map_err(|err| {
                error!(
                    subscription_id = id,
                    action,
                    db_error = ?err,
                    "subscriptions: failed to update subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            subscription_id = id,
            status = %subscription.status,
            action,
            "subscriptions: subscription updated"
        );
        Ok(subscription)
    }
}
