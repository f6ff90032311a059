use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    application::{
        mappers::create_subscription::CreateSubscriptionMapper,
        usercases::subscriptions::{SubscriptionError, SubscriptionUseCase},
        validators::create_subscription::CreateSubscriptionValidator,
    },
    domain::{
        clock::{Clock, SystemClock},
        repositories::subscriptions::SubscriptionRepository,
        value_objects::subscriptions::{
            CreateSubscriptionDto, ListSubscriptionsFilter, SubscriptionDto,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::subscriptions::SubscriptionPostgres,
    },
};

type PostgresUseCase = SubscriptionUseCase<SubscriptionPostgres, SystemClock>;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let subscription_usecase: PostgresUseCase = SubscriptionUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(CreateSubscriptionValidator::new()),
        Arc::new(CreateSubscriptionMapper::new()),
        Arc::new(SystemClock),
    );

    Router::new()
        .route(
            "/",
            get(list::<SubscriptionPostgres, SystemClock>)
                .post(upsert::<SubscriptionPostgres, SystemClock>),
        )
        .route(
            "/:id",
            get(find_by_id::<SubscriptionPostgres, SystemClock>)
                .delete(delete::<SubscriptionPostgres, SystemClock>),
        )
        .route(
            "/:id/cancel",
            post(cancel::<SubscriptionPostgres, SystemClock>),
        )
        .route(
            "/:id/expire",
            post(expire::<SubscriptionPostgres, SystemClock>),
        )
        .with_state(Arc::new(subscription_usecase))
}

pub async fn upsert<T, C>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T, C>>>,
    Json(create_subscription_dto): Json<CreateSubscriptionDto>,
) -> Result<impl IntoResponse, SubscriptionError>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    let subscription = subscription_usecase.upsert(create_subscription_dto).await?;
    Ok((StatusCode::OK, Json(SubscriptionDto::from(subscription))))
}

pub async fn list<T, C>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T, C>>>,
    Query(filter): Query<ListSubscriptionsFilter>,
) -> Result<impl IntoResponse, SubscriptionError>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    let subscriptions = subscription_usecase.list(filter.user_id).await?;
    let body = subscriptions
        .into_iter()
        .map(SubscriptionDto::from)
        .collect::<Vec<_>>();
    Ok((StatusCode::OK, Json(body)))
}

pub async fn find_by_id<T, C>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T, C>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, SubscriptionError>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    let subscription = subscription_usecase.get(id).await?;
    Ok((StatusCode::OK, Json(SubscriptionDto::from(subscription))))
}

pub async fn cancel<T, C>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T, C>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, SubscriptionError>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    let subscription = subscription_usecase.cancel(id).await?;
    Ok((StatusCode::OK, Json(SubscriptionDto::from(subscription))))
}

pub async fn expire<T, C>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T, C>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, SubscriptionError>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    let subscription = subscription_usecase.expire(id).await?;
    Ok((StatusCode::OK, Json(SubscriptionDto::from(subscription))))
}

pub async fn delete<T, C>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T, C>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, SubscriptionError>
where
    T: SubscriptionRepository + Send + Sync,
    C: Clock,
{
    subscription_usecase.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
