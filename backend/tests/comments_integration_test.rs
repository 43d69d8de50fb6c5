//! Integration tests for movie comment endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_comment_requires_auth() {
    let app = common::TestApp::new().await;

    let body = json!({
        "movieId": "tt0111161",
        "text": "Great movie"
    });

    let (status, _) = app.post("/comments", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_comment_success() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "movieId": "tt0111161",
        "text": "Hope is a good thing"
    });

    let (status, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["movieId"], "tt0111161");
    assert_eq!(response["text"], "Hope is a good thing");
    assert_eq!(response["userId"], user.id);
    assert!(response["parentId"].is_null());
    assert!(!response["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_comment_missing_fields() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({ "movieId": "tt0111161" });

    let (status, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Movie ID and text are required");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_reply() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "movieId": "tt0068646",
        "text": "An offer you can't refuse"
    });
    let (_, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let parent_id = response["id"].as_str().unwrap().to_string();

    let body = json!({
        "movieId": "tt0068646",
        "text": "Agreed",
        "parentId": parent_id
    });
    let (status, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["parentId"], parent_id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_reply_to_missing_parent() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "movieId": "tt0068646",
        "text": "Orphan reply",
        "parentId": uuid::Uuid::new_v4().to_string()
    });

    let (status, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Parent comment not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_reply_with_malformed_parent_id() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "movieId": "tt0068646",
        "text": "Bad parent",
        "parentId": "not-a-uuid"
    });

    let (status, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Invalid parent comment ID");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_comments_is_public() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/movies/tt9999999/comments").await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_comments_threaded() {
    let app = common::TestApp::new().await;
    let author = app.create_test_user().await;
    let replier = app.create_test_user().await;
    let movie_id = format!("movie_{}", uuid::Uuid::new_v4());

    // Two top-level comments
    let body = json!({ "movieId": movie_id, "text": "First" });
    let (_, response) = app
        .post_auth("/comments", &body.to_string(), &author.access_token)
        .await;
    let first: serde_json::Value = serde_json::from_str(&response).unwrap();

    let body = json!({ "movieId": movie_id, "text": "Second" });
    app.post_auth("/comments", &body.to_string(), &author.access_token)
        .await;

    // A reply under the first one, from a different user
    let body = json!({
        "movieId": movie_id,
        "text": "Replying to first",
        "parentId": first["id"]
    });
    app.post_auth("/comments", &body.to_string(), &replier.access_token)
        .await;

    let (status, response) = app
        .get(&format!("/movies/{}/comments", movie_id))
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let threads = response.as_array().unwrap();
    assert_eq!(threads.len(), 2);

    // Newest top-level comment first
    assert_eq!(threads[0]["text"], "Second");
    assert_eq!(threads[0]["replies"].as_array().unwrap().len(), 0);

    assert_eq!(threads[1]["text"], "First");
    assert_eq!(threads[1]["user"]["name"], author.name);
    assert_eq!(threads[1]["user"]["id"], author.id);

    let replies = threads[1]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["text"], "Replying to first");
    assert_eq!(replies[0]["parentId"], first["id"]);
    assert_eq!(replies[0]["user"]["id"], replier.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_replies_oldest_first() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let movie_id = format!("movie_{}", uuid::Uuid::new_v4());

    let body = json!({ "movieId": movie_id, "text": "Thread root" });
    let (_, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;
    let root: serde_json::Value = serde_json::from_str(&response).unwrap();

    for text in ["Reply one", "Reply two", "Reply three"] {
        let body = json!({
            "movieId": movie_id,
            "text": text,
            "parentId": root["id"]
        });
        app.post_auth("/comments", &body.to_string(), &user.access_token)
            .await;
    }

    let (_, response) = app
        .get(&format!("/movies/{}/comments", movie_id))
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();

    let replies = response[0]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["text"], "Reply one");
    assert_eq!(replies[2]["text"], "Reply three");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_comment() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let movie_id = format!("movie_{}", uuid::Uuid::new_v4());

    let body = json!({ "movieId": movie_id, "text": "Delete me" });
    let (_, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let comment_id = response["id"].as_str().unwrap().to_string();

    let (status, response) = app
        .delete_auth(&format!("/comments/{}", comment_id), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Comment deleted");

    let (_, response) = app
        .get(&format!("/movies/{}/comments", movie_id))
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_comment_of_other_user() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let intruder = app.create_test_user().await;

    let body = json!({ "movieId": "tt0133093", "text": "Mine" });
    let (_, response) = app
        .post_auth("/comments", &body.to_string(), &owner.access_token)
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let comment_id = response["id"].as_str().unwrap().to_string();

    let (status, response) = app
        .delete_auth(&format!("/comments/{}", comment_id), &intruder.access_token)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Forbidden");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_unknown_comment() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let path = format!("/comments/{}", uuid::Uuid::new_v4());
    let (status, response) = app.delete_auth(&path, &user.access_token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Comment not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleting_parent_removes_replies() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let movie_id = format!("movie_{}", uuid::Uuid::new_v4());

    let body = json!({ "movieId": movie_id, "text": "Root" });
    let (_, response) = app
        .post_auth("/comments", &body.to_string(), &user.access_token)
        .await;
    let root: serde_json::Value = serde_json::from_str(&response).unwrap();

    let body = json!({
        "movieId": movie_id,
        "text": "Reply",
        "parentId": root["id"]
    });
    app.post_auth("/comments", &body.to_string(), &user.access_token)
        .await;

    let root_id = root["id"].as_str().unwrap();
    app.delete_auth(&format!("/comments/{}", root_id), &user.access_token)
        .await;

    // The cascade takes the reply with it
    let (_, response) = app
        .get(&format!("/movies/{}/comments", movie_id))
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response.as_array().unwrap().len(), 0);
}
