use storefront_api::{
    error::AppError,
    middleware::auth::{AuthUser, bearer_token, decode_token, ensure_admin, ensure_self_or_admin},
    models::{ROLE_ADMIN, ROLE_USER},
    services::auth_service::{hash_password, issue_token, verify_password},
};

const SECRET: &str = "test-secret";

#[test]
fn token_round_trips_user_and_role() {
    let token = issue_token(SECRET, 42, ROLE_ADMIN, 24).unwrap();
    let user = decode_token(SECRET, &token).unwrap();
    assert_eq!(user.user_id, 42);
    assert_eq!(user.role, ROLE_ADMIN);
    assert!(user.is_admin());
}

#[test]
fn token_with_wrong_secret_is_rejected() {
    let token = issue_token(SECRET, 1, ROLE_USER, 24).unwrap();
    let err = decode_token("other-secret", &token).unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[test]
fn expired_token_is_rejected() {
    let token = issue_token(SECRET, 1, ROLE_USER, -2).unwrap();
    assert!(matches!(
        decode_token(SECRET, &token),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn out_of_range_ttl_is_an_error() {
    assert!(matches!(
        issue_token(SECRET, 1, ROLE_USER, i64::MAX),
        Err(AppError::Internal(_))
    ));
    assert!(issue_token(SECRET, 1, ROLE_USER, i64::MIN).is_err());
}

#[test]
fn bearer_header_parsing() {
    assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
    assert_eq!(bearer_token("Bearer "), None);
    assert_eq!(bearer_token("Basic abc"), None);
    assert_eq!(bearer_token("abc"), None);
}

#[test]
fn ownership_guards() {
    let user = AuthUser {
        user_id: 7,
        role: ROLE_USER.to_string(),
    };
    let admin = AuthUser {
        user_id: 1,
        role: ROLE_ADMIN.to_string(),
    };

    assert!(ensure_self_or_admin(&user, 7).is_ok());
    assert!(matches!(ensure_self_or_admin(&user, 8), Err(AppError::Forbidden)));
    assert!(ensure_self_or_admin(&admin, 8).is_ok());

    assert!(matches!(ensure_admin(&user), Err(AppError::Forbidden)));
    assert!(ensure_admin(&admin).is_ok());
}

#[test]
fn password_hash_verifies() {
    let hash = hash_password("password123").unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("password123", &hash).unwrap());
    assert!(!verify_password("password124", &hash).unwrap());
}
