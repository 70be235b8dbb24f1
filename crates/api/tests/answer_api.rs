//! HTTP-level integration tests for answers and voting.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth, user_with_token};
use serde_json::json;
use sqlx::PgPool;

async fn question_id(app: axum::Router, token: &str) -> i64 {
    let body = json!({ "title": "How do I borrow?", "content": "Mutably, twice." });
    let response = post_json_auth(app, "/api/v1/questions", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn answer(app: axum::Router, token: &str, question_id: i64, content: &str) -> i64 {
    let body = json!({ "questionId": question_id, "content": content });
    let response = post_json_auth(app, "/api/v1/answers", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answers_listed_newest_first(pool: PgPool) {
    let (_alice, token) = user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let qid = question_id(app.clone(), &token).await;
    answer(app.clone(), &token, qid, "You can't.").await;
    answer(app.clone(), &token, qid, "Use RefCell.").await;

    let response = get(app, &format!("/api/v1/answers?question_id={qid}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["content"], "Use RefCell.");
    assert_eq!(data[0]["votes"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answer_to_missing_question_is_404(pool: PgPool) {
    let (_alice, token) = user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let body = json!({ "question_id": 424242, "content": "Into the void" });
    let response = post_json_auth(app, "/api/v1/answers", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The question disappears after the request is accepted but before the
/// answer row is written. A trigger deletes it mid-insert.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_deleted_during_insert_is_404(pool: PgPool) {
    let (_alice, token) = user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool.clone());
    let qid = question_id(app.clone(), &token).await;

    sqlx::query(
        "CREATE FUNCTION drop_question_first() RETURNS trigger AS $$
         BEGIN
             DELETE FROM questions WHERE id = NEW.question_id;
             RETURN NEW;
         END;
         $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER drop_question_first BEFORE INSERT ON answers
         FOR EACH ROW EXECUTE FUNCTION drop_question_first()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let body = json!({ "question_id": qid, "content": "Too late" });
    let response = post_json_auth(app, "/api/v1/answers", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Question not found");

    let answers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM answers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(answers, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_answer_is_400(pool: PgPool) {
    let (_alice, token) = user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let qid = question_id(app.clone(), &token).await;
    let body = json!({ "question_id": qid, "content": "" });
    let response = post_json_auth(app, "/api/v1/answers", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_voting(pool: PgPool) {
    let (_alice, alice_token) = user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let qid = question_id(app.clone(), &alice_token).await;
    let aid = answer(app.clone(), &alice_token, qid, "Use Rc").await;
    let uri = format!("/api/v1/answers/{aid}/vote");

    for _ in 0..2 {
        let response =
            post_json_auth(app.clone(), &uri, json!({ "vote_type": "upvote" }), &bob_token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response =
        post_json_auth(app.clone(), &uri, json!({ "vote_type": "downvote" }), &bob_token).await;
    assert_eq!(body_json(response).await["data"]["votes"], 1);

    let response =
        post_json_auth(app.clone(), &uri, json!({ "vote_type": "sideways" }), &bob_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/answers/999999/vote",
        json!({ "vote_type": "upvote" }),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answer_owner_gating(pool: PgPool) {
    let (_alice, alice_token) = user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let qid = question_id(app.clone(), &alice_token).await;
    let aid = answer(app.clone(), &alice_token, qid, "Mine").await;
    let uri = format!("/api/v1/answers/{aid}");

    let response =
        put_json_auth(app.clone(), &uri, json!({ "content": "Theirs" }), &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete_auth(app.clone(), &uri, &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response =
        put_json_auth(app.clone(), &uri, json!({ "content": "Edited" }), &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["content"], "Edited");

    let response = delete_auth(app.clone(), &uri, &alice_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/answers?question_id={qid}")).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}
