//! Integration tests for user accounts and refresh-token sessions.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use studyhub_db::models::session::CreateSession;
use studyhub_db::models::user::CreateUser;
use studyhub_db::repositories::{SessionRepo, UserRepo};

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        display_name: format!("{username} display"),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ada")).await.unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(user.failed_login_count, 0);
    assert!(user.locked_until.is_none());

    let by_name = UserRepo::find_by_username(&pool, "ada").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.display_name, "ada display");

    assert!(UserRepo::find_by_username(&pool, "nobody").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup")).await.unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_logins_and_reset(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("grace")).await.unwrap();

    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 1);
    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 2);

    let until = Utc::now() + Duration::minutes(15);
    UserRepo::lock_account(&pool, user.id, until).await.unwrap();
    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let reset = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reset.failed_login_count, 0);
    assert!(reset.locked_until.is_none());
    assert!(reset.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lifecycle(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("linus")).await.unwrap();

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "hash-1".to_string(),
            expires_at: Utc::now() + Duration::days(7),
        },
    )
    .await
    .unwrap();

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, session.id);

    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-1")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_not_found(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("old")).await.unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "stale".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "stale")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_all_for_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("many")).await.unwrap();
    for i in 0..3 {
        SessionRepo::create(
            &pool,
            &CreateSession {
                user_id: user.id,
                refresh_token_hash: format!("h{i}"),
                expires_at: Utc::now() + Duration::days(1),
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 3);
    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 0);
}
