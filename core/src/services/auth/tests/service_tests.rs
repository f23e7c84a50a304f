//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::otp_record::{OtpRecord, PendingSignup, MAX_ATTEMPTS};
use crate::errors::{AuthError, DomainError};
use crate::repositories::user_repository::mock::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::auth::config::AuthServiceConfig;
use crate::services::auth::service::AuthService;
use crate::services::auth::types::RegistrationData;

use super::mocks::{MockDeliveryGateway, MockOtpStore};

type TestService = AuthService<MockDeliveryGateway, MockOtpStore, MockUserRepository>;

struct Fixture {
    service: Arc<TestService>,
    gateway: Arc<MockDeliveryGateway>,
    store: Arc<MockOtpStore>,
    users: Arc<MockUserRepository>,
}

fn fixture_with(gateway: MockDeliveryGateway, config: AuthServiceConfig) -> Fixture {
    let gateway = Arc::new(gateway);
    let store = Arc::new(MockOtpStore::new());
    let users = Arc::new(MockUserRepository::new());
    let service = Arc::new(AuthService::new(
        gateway.clone(),
        store.clone(),
        users.clone(),
        config,
    ));
    Fixture {
        service,
        gateway,
        store,
        users,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockDeliveryGateway::new(), AuthServiceConfig::default())
}

fn debug_config() -> AuthServiceConfig {
    AuthServiceConfig {
        expose_debug_code: true,
        ..AuthServiceConfig::default()
    }
}

#[tokio::test]
async fn test_issue_normalizes_and_stores_record() {
    let f = fixture();

    let result = f.service.issue_code("9876543210", None).await.unwrap();
    assert_eq!(result.resend_after, 300);
    assert!(result.debug_code.is_none());

    let record = f.store.record("+919876543210").await.expect("record stored");
    assert_eq!(record.attempts, 0);
    assert_eq!(record.code.len(), 6);
    assert!(record.code.chars().all(|c| c.is_ascii_digit()));

    let remaining = record.seconds_until_expiry();
    assert!((295..=300).contains(&remaining));

    // The delivered code is the stored code.
    assert_eq!(f.gateway.sent_code("+919876543210"), Some(record.code));
}

#[tokio::test]
async fn test_issue_exposes_code_in_debug_config() {
    let f = fixture_with(MockDeliveryGateway::new(), debug_config());

    let result = f.service.issue_code("9876543210", None).await.unwrap();
    let record = f.store.record("+919876543210").await.unwrap();
    assert_eq!(result.debug_code, Some(record.code));
}

#[tokio::test]
async fn test_issue_rejects_invalid_identifier() {
    let f = fixture();

    let result = f.service.issue_code("12345", None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidIdentifier))
    ));

    let result = f.service.issue_code("bad@@example.com", None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidIdentifier))
    ));
}

#[tokio::test]
async fn test_issue_twice_within_ttl_hits_cooldown() {
    let f = fixture();

    f.service.issue_code("9876543210", None).await.unwrap();
    let result = f.service.issue_code("9876543210", None).await;

    match result {
        Err(DomainError::Auth(AuthError::CooldownActive {
            retry_after_seconds,
        })) => {
            assert!(retry_after_seconds <= 300);
            assert!(retry_after_seconds > 290);
        }
        other => panic!("expected CooldownActive, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_issue_after_expiry_succeeds() {
    let config = AuthServiceConfig {
        code_ttl_minutes: 0,
        ..AuthServiceConfig::default()
    };
    let f = fixture_with(MockDeliveryGateway::new(), config);

    f.service.issue_code("9876543210", None).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    // The leftover record is expired, so a fresh issuance overwrites it.
    f.service.issue_code("9876543210", None).await.unwrap();
}

#[tokio::test]
async fn test_delivery_failure_rolls_back_record() {
    let f = fixture_with(MockDeliveryGateway::failing(), AuthServiceConfig::default());

    let result = f.service.issue_code("9876543210", None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DeliveryFailed))
    ));
    assert!(f.store.record("+919876543210").await.is_none());
}

#[tokio::test]
async fn test_reissue_not_cooldown_blocked_after_delivery_failure() {
    let f = fixture_with(MockDeliveryGateway::failing(), AuthServiceConfig::default());
    let _ = f.service.issue_code("9876543210", None).await;

    // With the record rolled back, the retry reaches the gateway again
    // instead of tripping the cooldown.
    let retry = f.service.issue_code("9876543210", None).await;
    assert!(matches!(
        retry,
        Err(DomainError::Auth(AuthError::DeliveryFailed))
    ));
}

#[tokio::test]
async fn test_delivery_timeout_rolls_back_record() {
    let config = AuthServiceConfig {
        delivery_timeout_secs: 1,
        ..AuthServiceConfig::default()
    };
    let f = fixture_with(MockDeliveryGateway::slow(1500), config);

    let result = f.service.issue_code("9876543210", None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DeliveryFailed))
    ));
    assert!(f.store.record("+919876543210").await.is_none());
}

#[tokio::test]
async fn test_verify_provisions_new_user() {
    let f = fixture();

    let signup = PendingSignup {
        name: Some("Asha".to_string()),
        phone: None,
        email: Some("asha@example.com".to_string()),
    };
    f.service
        .issue_code("9876543210", Some(signup))
        .await
        .unwrap();
    let code = f.gateway.sent_code("+919876543210").unwrap();

    let verified = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await
        .unwrap();

    assert!(verified.is_new_user);
    assert_eq!(verified.user.phone.as_deref(), Some("+919876543210"));
    assert_eq!(verified.user.name.as_deref(), Some("Asha"));
    assert_eq!(verified.user.email.as_deref(), Some("asha@example.com"));
    assert!(f.store.record("+919876543210").await.is_none());
}

#[tokio::test]
async fn test_verify_is_single_use() {
    let f = fixture();

    f.service.issue_code("9876543210", None).await.unwrap();
    let code = f.gateway.sent_code("+919876543210").unwrap();

    f.service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await
        .unwrap();

    let replay = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await;
    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::NotFoundOrExpired))
    ));
}

#[tokio::test]
async fn test_verify_wrong_code_counts_down_and_consumes() {
    let f = fixture();
    f.service.issue_code("9876543210", None).await.unwrap();

    for expected_left in [2u32, 1, 0] {
        let result = f
            .service
            .verify_code("9876543210", "000000", RegistrationData::default())
            .await;
        match result {
            Err(DomainError::Auth(AuthError::InvalidCode { attempts_left })) => {
                assert_eq!(attempts_left, expected_left)
            }
            other => panic!("expected InvalidCode, got {:?}", other.map(|_| ())),
        }
    }

    // The third failure consumed the record.
    let result = f
        .service
        .verify_code("9876543210", "000000", RegistrationData::default())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NotFoundOrExpired))
    ));
}

#[tokio::test]
async fn test_verify_correct_code_after_expiry_reports_expired() {
    let config = AuthServiceConfig {
        code_ttl_minutes: 0,
        ..AuthServiceConfig::default()
    };
    let f = fixture_with(MockDeliveryGateway::new(), config);

    f.service.issue_code("9876543210", None).await.unwrap();
    let code = f.gateway.sent_code("+919876543210").unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let result = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::Expired))));
    assert!(f.store.record("+919876543210").await.is_none());
}

#[tokio::test]
async fn test_verify_exhausted_record_reports_exhaustion() {
    let f = fixture();

    // A record that somehow persisted at the cap is reported exhausted
    // ahead of any other check, then consumed.
    let mut record = OtpRecord::new("+919876543210".to_string(), None);
    record.attempts = MAX_ATTEMPTS;
    let code = record.code.clone();
    f.store.insert(record).await;

    let result = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AttemptsExhausted))
    ));

    let result = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NotFoundOrExpired))
    ));
}

#[tokio::test]
async fn test_verify_unknown_identifier() {
    let f = fixture();
    let result = f
        .service
        .verify_code("9876543210", "123456", RegistrationData::default())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NotFoundOrExpired))
    ));
}

#[tokio::test]
async fn test_verify_rejects_malformed_code_without_burning_attempts() {
    let f = fixture();
    f.service.issue_code("9876543210", None).await.unwrap();

    let result = f
        .service
        .verify_code("9876543210", "12ab", RegistrationData::default())
        .await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));

    let record = f.store.record("+919876543210").await.unwrap();
    assert_eq!(record.attempts, 0);
}

#[tokio::test]
async fn test_verify_rejects_existing_user_and_consumes_code() {
    let f = fixture();

    f.users
        .create(crate::domain::entities::user::UserIdentity::new(
            None,
            Some("+919876543210".to_string()),
            None,
            None,
        ))
        .await
        .unwrap();

    f.service.issue_code("9876543210", None).await.unwrap();
    let code = f.gateway.sent_code("+919876543210").unwrap();

    let result = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    // The code was consumed even though provisioning was rejected.
    let replay = f
        .service
        .verify_code("9876543210", &code, RegistrationData::default())
        .await;
    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::NotFoundOrExpired))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_verifies_yield_single_success() {
    let f = fixture();

    f.service.issue_code("9876543210", None).await.unwrap();
    let code = f.gateway.sent_code("+919876543210").unwrap();

    let mut handles = Vec::new();
    for submitted in [code, "000000".to_string(), "111111".to_string()] {
        let service = f.service.clone();
        handles.push(tokio::spawn(async move {
            service
                .verify_code("9876543210", &submitted, RegistrationData::default())
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_email_flow_with_password_login() {
    let f = fixture();

    f.service
        .issue_code("Asha@Example.com", None)
        .await
        .unwrap();
    let code = f.gateway.sent_code("asha@example.com").unwrap();

    let registration = RegistrationData {
        name: Some("Asha".to_string()),
        password: Some("hunter2hunter2".to_string()),
        ..RegistrationData::default()
    };
    let verified = f
        .service
        .verify_code("asha@example.com", &code, registration)
        .await
        .unwrap();
    assert!(verified.user.has_password());

    let user = f
        .service
        .login("Asha@Example.com", "hunter2hunter2")
        .await
        .unwrap();
    assert_eq!(user.id, verified.user.id);

    let wrong = f.service.login("asha@example.com", "wrong-password").await;
    assert!(matches!(
        wrong,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));

    let unknown = f.service.login("nobody@example.com", "hunter2hunter2").await;
    assert!(matches!(
        unknown,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));
}
