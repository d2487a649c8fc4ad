//! Integration-style tests for the credential verifier against mock
//! repositories.

use std::sync::Arc;
use chrono::{Duration, Utc};

use crate::domain::entities::{reasons, Account};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{AccountRepository, MockAccountRepository, MockLoginAuditRepository};
use crate::services::auth::{AuthService, LoginPolicy};
use crate::services::password::PasswordHasher;

const PASSWORD: &str = "correct horse";
const IP: &str = "203.0.113.7";

fn hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

fn account_with_password(username: &str, password: &str) -> Account {
    let hasher = hasher();
    let salt = PasswordHasher::generate_salt();
    let hash = hasher.hash(password, &salt).unwrap();
    Account::new(username.to_string(), hash, salt)
}

async fn service_with(
    accounts: Vec<Account>,
) -> (
    AuthService<MockAccountRepository, MockLoginAuditRepository>,
    Arc<MockAccountRepository>,
    Arc<MockLoginAuditRepository>,
) {
    let account_repo = Arc::new(MockAccountRepository::new());
    for account in accounts {
        account_repo.seed(account).await;
    }
    let audit_repo = Arc::new(MockLoginAuditRepository::new());
    let service = AuthService::new(
        account_repo.clone(),
        audit_repo.clone(),
        hasher(),
        LoginPolicy::default(),
    );
    (service, account_repo, audit_repo)
}

fn assert_auth_err(result: Result<impl std::fmt::Debug, DomainError>, expected: AuthError) {
    match result {
        Err(DomainError::Auth(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn test_successful_login_resets_counter_and_audits_once() {
    let mut account = account_with_password("editor", PASSWORD);
    account.failed_attempts = 3;
    let (service, account_repo, audit_repo) = service_with(vec![account]).await;

    let view = service.login("editor", PASSWORD, IP).await.unwrap();

    assert_eq!(view.username, "editor");
    assert_eq!(view.login_count, 1);
    assert_eq!(view.last_login_ip.as_deref(), Some(IP));

    let stored = account_repo.find_by_username("editor").await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 0);

    let entries = audit_repo.entries().await;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].success);
    assert_eq!(entries[0].account_id, Some(stored.id));
}

#[tokio::test]
async fn test_success_view_has_no_secret_fields() {
    let (service, _, _) = service_with(vec![account_with_password("editor", PASSWORD)]).await;

    let view = service.login("editor", PASSWORD, IP).await.unwrap();
    let json = serde_json::to_string(&view).unwrap();

    assert!(!json.contains("password_hash"));
    assert!(!json.contains("password_salt"));
}

#[tokio::test]
async fn test_unknown_identifier_audits_with_null_account() {
    let (service, _, audit_repo) = service_with(vec![]).await;

    let result = service.login("nobody", PASSWORD, IP).await;
    assert_auth_err(result, AuthError::AccountNotFound);

    let entries = audit_repo.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].account_id, None);
    assert_eq!(
        entries[0].failure_reason.as_deref(),
        Some(reasons::ACCOUNT_NOT_FOUND)
    );
}

#[tokio::test]
async fn test_bad_password_increments_counter() {
    let (service, account_repo, audit_repo) =
        service_with(vec![account_with_password("editor", PASSWORD)]).await;

    let result = service.login("editor", "wrong", IP).await;
    assert_auth_err(result, AuthError::InvalidCredential);

    let stored = account_repo.find_by_username("editor").await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 1);
    assert!(stored.enabled);

    let entries = audit_repo.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].failure_reason.as_deref(),
        Some(reasons::BAD_PASSWORD)
    );
}

#[tokio::test]
async fn test_fifth_failure_disables_account() {
    let mut account = account_with_password("editor", PASSWORD);
    account.failed_attempts = 4;
    let (service, account_repo, _) = service_with(vec![account]).await;

    let result = service.login("editor", "wrong", IP).await;
    assert_auth_err(result, AuthError::InvalidCredential);

    let stored = account_repo.find_by_username("editor").await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 5);
    assert!(!stored.enabled);
}

#[tokio::test]
async fn test_five_consecutive_failures_then_correct_password_is_rejected() {
    let (service, _, audit_repo) =
        service_with(vec![account_with_password("editor", PASSWORD)]).await;

    for _ in 0..5 {
        let result = service.login("editor", "wrong", IP).await;
        assert_auth_err(result, AuthError::InvalidCredential);
    }

    // sixth attempt, correct password: rejected without a hash comparison
    let result = service.login("editor", PASSWORD, IP).await;
    assert_auth_err(result, AuthError::AccountDisabled);

    let entries = audit_repo.entries().await;
    assert_eq!(entries.len(), 6);
    assert_eq!(
        entries[5].failure_reason.as_deref(),
        Some(reasons::ACCOUNT_DISABLED)
    );
}

#[tokio::test]
async fn test_disabled_account_is_rejected_without_counter_change() {
    let mut account = account_with_password("editor", PASSWORD);
    account.enabled = false;
    account.failed_attempts = 2;
    let (service, account_repo, _) = service_with(vec![account]).await;

    let result = service.login("editor", PASSWORD, IP).await;
    assert_auth_err(result, AuthError::AccountDisabled);

    let stored = account_repo.find_by_id_any(1).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 2);
}

#[tokio::test]
async fn test_manually_locked_account_is_rejected() {
    let mut account = account_with_password("editor", PASSWORD);
    account.locked_until = Some(Utc::now() + Duration::minutes(30));
    let (service, _, audit_repo) = service_with(vec![account]).await;

    let result = service.login("editor", PASSWORD, IP).await;
    assert_auth_err(result, AuthError::AccountLocked);

    let entries = audit_repo.entries().await;
    assert_eq!(
        entries[0].failure_reason.as_deref(),
        Some(reasons::ACCOUNT_LOCKED)
    );
}

#[tokio::test]
async fn test_expired_lock_admits_login_and_stays_set() {
    let mut account = account_with_password("editor", PASSWORD);
    account.locked_until = Some(Utc::now() - Duration::minutes(1));
    let (service, account_repo, _) = service_with(vec![account]).await;

    service.login("editor", PASSWORD, IP).await.unwrap();

    // the lock field is only cleared by an explicit unlock
    let stored = account_repo.find_by_username("editor").await.unwrap().unwrap();
    assert!(stored.locked_until.is_some());
}

#[tokio::test]
async fn test_identifier_resolution_prefers_username_over_email() {
    // one account's username collides with another's e-mail address
    let by_username = account_with_password("shared@example.com", PASSWORD);
    let by_email =
        account_with_password("someone_else", "other password").with_email("shared@example.com");
    let (service, account_repo, _) = service_with(vec![by_username, by_email]).await;

    let view = service.login("shared@example.com", PASSWORD, IP).await.unwrap();

    let expected = account_repo
        .find_by_username("shared@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.id, expected.id);
}

#[tokio::test]
async fn test_login_by_email_and_phone() {
    let account = account_with_password("editor", PASSWORD)
        .with_email("editor@example.com")
        .with_phone("13800000000");
    let (service, _, _) = service_with(vec![account]).await;

    assert!(service.login("editor@example.com", PASSWORD, IP).await.is_ok());
    assert!(service.login("13800000000", PASSWORD, IP).await.is_ok());
}

#[tokio::test]
async fn test_soft_deleted_account_is_not_found() {
    let mut account = account_with_password("editor", PASSWORD);
    account.mark_deleted();
    let (service, _, audit_repo) = service_with(vec![account]).await;

    let result = service.login("editor", PASSWORD, IP).await;
    assert_auth_err(result, AuthError::AccountNotFound);

    let entries = audit_repo.entries().await;
    assert_eq!(entries[0].account_id, None);
}

#[tokio::test]
async fn test_login_history_returns_newest_first() {
    let (service, _, _) = service_with(vec![account_with_password("editor", PASSWORD)]).await;

    let _ = service.login("editor", "wrong", IP).await;
    service.login("editor", PASSWORD, IP).await.unwrap();

    let history = service.login_history(1, 10).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].success);
    assert!(!history[1].success);
}
