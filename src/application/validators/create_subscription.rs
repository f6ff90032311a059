use chrono::{DateTime, Utc};

use crate::domain::value_objects::{
    enums::providers::Provider,
    subscriptions::CreateSubscriptionDto,
    validation::{
        EXPIRATION_DATE_INVALID, FieldError, NAME_INVALID, PROVIDER_INVALID, USER_ID_INVALID,
        ValidationResult,
    },
};

/// Field-level checks for a create request. Every rule runs; nothing short-circuits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSubscriptionValidator;

impl CreateSubscriptionValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, dto: &CreateSubscriptionDto, now: DateTime<Utc>) -> ValidationResult {
        let mut result = ValidationResult::default();

        if dto.user_id.is_none() {
            result.add(FieldError::new(USER_ID_INVALID, "userId is invalid"));
        }
        if dto.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            result.add(FieldError::new(NAME_INVALID, "name is invalid"));
        }
        if dto
            .provider
            .as_deref()
            .and_then(Provider::find_by_name)
            .is_none()
        {
            result.add(FieldError::new(PROVIDER_INVALID, "provider is invalid"));
        }
        if dto
            .expiration_date
            .is_none_or(|expiration_date| expiration_date <= now)
        {
            result.add(FieldError::new(
                EXPIRATION_DATE_INVALID,
                "expirationDate is invalid",
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_dto(now: DateTime<Utc>) -> CreateSubscriptionDto {
        CreateSubscriptionDto {
            user_id: Some(1),
            name: Some("test".to_string()),
            provider: Some("google".to_string()),
            expiration_date: Some(now + Duration::seconds(60)),
        }
    }

    #[test]
    fn valid_request_has_no_errors() {
        let now = Utc::now();

        let result = CreateSubscriptionValidator::new().validate(&valid_dto(now), now);

        assert!(!result.has_errors());
    }

    #[test]
    fn missing_user_id_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            user_id: None,
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(
            result.errors(),
            &[FieldError::new(USER_ID_INVALID, "userId is invalid")]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            name: Some("   ".to_string()),
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(
            result.errors(),
            &[FieldError::new(NAME_INVALID, "name is invalid")]
        );
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            provider: Some("undefine_provider".to_string()),
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(
            result.errors(),
            &[FieldError::new(PROVIDER_INVALID, "provider is invalid")]
        );
    }

    #[test]
    fn padded_provider_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            provider: Some(" google ".to_string()),
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(result.codes(), vec![PROVIDER_INVALID]);
    }

    #[test]
    fn provider_match_ignores_case() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            provider: Some("APPLE".to_string()),
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert!(!result.has_errors());
    }

    #[test]
    fn past_expiration_date_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            expiration_date: Some(now - Duration::seconds(60)),
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(
            result.errors(),
            &[FieldError::new(
                EXPIRATION_DATE_INVALID,
                "expirationDate is invalid"
            )]
        );
    }

    #[test]
    fn expiration_date_equal_to_now_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            expiration_date: Some(now),
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(result.codes(), vec![EXPIRATION_DATE_INVALID]);
    }

    #[test]
    fn missing_expiration_date_is_rejected() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            expiration_date: None,
            ..valid_dto(now)
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(result.codes(), vec![EXPIRATION_DATE_INVALID]);
    }

    #[test]
    fn all_errors_are_collected_in_field_order() {
        let now = Utc::now();
        let dto = CreateSubscriptionDto {
            user_id: None,
            name: Some("test".to_string()),
            provider: None,
            expiration_date: None,
        };

        let result = CreateSubscriptionValidator::new().validate(&dto, now);

        assert_eq!(
            result.errors(),
            &[
                FieldError::new(USER_ID_INVALID, "userId is invalid"),
                FieldError::new(PROVIDER_INVALID, "provider is invalid"),
                FieldError::new(EXPIRATION_DATE_INVALID, "expirationDate is invalid"),
            ]
        );
    }

    #[test]
    fn empty_request_fails_every_rule() {
        let result =
            CreateSubscriptionValidator::new().validate(&CreateSubscriptionDto::default(), Utc::now());

        assert_eq!(result.codes(), vec![100, 101, 102, 103]);
    }
}
