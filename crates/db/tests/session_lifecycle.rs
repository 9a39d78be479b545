//! Integration tests for refresh-token sessions and the login bookkeeping
//! columns on users.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use strata_db::models::session::CreateSession;
use strata_db::models::user::CreateUser;
use strata_db::repositories::{SessionRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "not-a-real-hash".to_string(),
            role_id: 2,
            condominium_id: None,
            first_name: "Sam".to_string(),
            last_name: "Session".to_string(),
            national_id: format!("NID-{username}"),
            phone: None,
            emergency_phone: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_session(user_id: i64, hash: &str, expires_in_days: i64) -> CreateSession {
    CreateSession {
        user_id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + Duration::days(expires_in_days),
        user_agent: Some("integration-test".to_string()),
        ip_address: None,
    }
}

// ---------------------------------------------------------------------------
// Test: session lookup and revocation
// ---------------------------------------------------------------------------

/// Lookup by hash only returns live sessions: revoked and expired rows are
/// invisible.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lookup_excludes_dead_rows(pool: PgPool) {
    let user_id = create_user(&pool, "sess1").await;

    let live = SessionRepo::create(&pool, &new_session(user_id, "hash-live", 7))
        .await
        .unwrap();
    assert!(!live.is_revoked);

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-live")
        .await
        .unwrap()
        .expect("live session is found");
    assert_eq!(found.id, live.id);
    assert_eq!(found.user_agent.as_deref(), Some("integration-test"));

    // Expired session.
    SessionRepo::create(&pool, &new_session(user_id, "hash-expired", -1))
        .await
        .unwrap();
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-expired")
        .await
        .unwrap()
        .is_none());

    // Revoked session.
    assert!(SessionRepo::revoke(&pool, live.id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-live")
        .await
        .unwrap()
        .is_none());

    // Revoking again is a no-op.
    assert!(!SessionRepo::revoke(&pool, live.id).await.unwrap());

    // Unknown hash.
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-ghost")
        .await
        .unwrap()
        .is_none());
}

/// Logout revokes every active session of the user and leaves others alone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_all_for_user(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    SessionRepo::create(&pool, &new_session(alice, "hash-a1", 7))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(alice, "hash-a2", 7))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(bob, "hash-b1", 7))
        .await
        .unwrap();

    let revoked = SessionRepo::revoke_all_for_user(&pool, alice).await.unwrap();
    assert_eq!(revoked, 2);

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-a1")
        .await
        .unwrap()
        .is_none());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-b1")
        .await
        .unwrap()
        .is_some());

    // Nothing left to revoke for alice.
    let again = SessionRepo::revoke_all_for_user(&pool, alice).await.unwrap();
    assert_eq!(again, 0);
}

/// The cleanup pass deletes expired and revoked rows, keeping live ones.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cleanup_expired(pool: PgPool) {
    let user_id = create_user(&pool, "cleaner").await;

    let live = SessionRepo::create(&pool, &new_session(user_id, "hash-keep", 7))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(user_id, "hash-old", -2))
        .await
        .unwrap();
    let revoked = SessionRepo::create(&pool, &new_session(user_id, "hash-rev", 7))
        .await
        .unwrap();
    SessionRepo::revoke(&pool, revoked.id).await.unwrap();

    let deleted = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(deleted, 2);

    let remaining: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining.unwrap_or(0), 1);
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-keep")
        .await
        .unwrap()
        .map(|s| s.id == live.id)
        .unwrap_or(false));
}

// ---------------------------------------------------------------------------
// Test: login bookkeeping
// ---------------------------------------------------------------------------

/// Failed logins count up, a lock timestamp sticks, and a successful login
/// clears both.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_bookkeeping(pool: PgPool) {
    let user_id = create_user(&pool, "lockable").await;

    UserRepo::increment_failed_login(&pool, user_id).await.unwrap();
    UserRepo::increment_failed_login(&pool, user_id).await.unwrap();
    let user = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert_eq!(user.failed_login_count, 2);
    assert!(user.locked_until.is_none());
    assert!(user.last_login_at.is_none());

    let until = Utc::now() + Duration::minutes(15);
    UserRepo::lock_account(&pool, user_id, until).await.unwrap();
    let locked = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, user_id).await.unwrap();
    let unlocked = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert_eq!(unlocked.failed_login_count, 0);
    assert!(unlocked.locked_until.is_none());
    assert!(unlocked.last_login_at.is_some());
}
