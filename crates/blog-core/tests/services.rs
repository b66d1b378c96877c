//! Endpoint wrappers against a mocked backend.


use blog_core::api::{articles, comments, users};
use blog_core::{ApiError, forms};
use blog_types::{ListParams, NewComment, ProfileUpdate};
use fixtures::{TOKEN, can_bind_localhost, failure, harness, ok};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_articles_page() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/articles"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ok(json!({
            "articles": [
                fixtures::article_json(2, "Second"),
                fixtures::article_json(1, "First"),
            ],
            "pagination": fixtures::pagination(1, 10, 2),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let page = articles::list(&h.client, ListParams::default())
        .await
        .unwrap();
    assert_eq!(page.articles.len(), 2);
    assert_eq!(page.articles[0].title, "Second");
    assert_eq!(page.articles[0].author_name(), "alice");
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_get_article_not_found() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/articles/99"))
        .respond_with(failure(404, "文章不存在", "NOT_FOUND"))
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = articles::get(&h.client, 99).await.unwrap_err();
    assert_eq!(err.server_message(), Some("文章不存在"));
}

#[tokio::test]
async fn test_create_update_delete_article() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let bearer = format!("Bearer {TOKEN}");
    Mock::given(method("POST"))
        .and(path("/api/v1/articles"))
        .and(header("authorization", bearer.as_str()))
        .and(body_json(json!({"title": "Hello", "content": "body"})))
        .respond_with(ok(fixtures::article_json(5, "Hello")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/articles/5"))
        .and(body_json(json!({"title": "Renamed"})))
        .respond_with(ok(fixtures::article_json(5, "Renamed")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/articles/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "文章删除成功",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session().start(TOKEN, None).unwrap();

    let created = articles::create(&h.client, &forms::new_article("Hello", "body").unwrap())
        .await
        .unwrap();
    assert_eq!(created.id, 5);

    let update = forms::article_update(Some("Renamed"), None).unwrap();
    let updated = articles::update(&h.client, 5, &update).await.unwrap();
    assert_eq!(updated.title, "Renamed");

    let message = articles::delete(&h.client, 5).await.unwrap();
    assert_eq!(message.as_deref(), Some("文章删除成功"));
}

#[tokio::test]
async fn test_list_comments_for_article() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/articles/42/comments"))
        .respond_with(ok(json!({
            "comments": [
                fixtures::comment_json(1, 42, "first"),
                fixtures::comment_json(2, 42, "second"),
                fixtures::comment_json(3, 42, "third"),
            ],
            "pagination": fixtures::pagination(1, 10, 3),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let page = comments::list(&h.client, 42, ListParams::default())
        .await
        .unwrap();
    assert_eq!(page.comments.len(), 3);
    assert!(page.comments.iter().all(|c| c.article_id == 42));
    assert_eq!(page.comments[1].author_name(), "bob");
}

#[tokio::test]
async fn test_create_comment_rejected() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/articles/42/comments"))
        .respond_with(failure(200, "评论发表失败", "INTERNAL_ERROR"))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session().start(TOKEN, None).unwrap();
    let err = comments::create(
        &h.client,
        42,
        &NewComment {
            content: "hi".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { .. }));
    assert_eq!(err.to_string(), "评论发表失败");
}

#[tokio::test]
async fn test_delete_comment() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/comments/8"))
        .respond_with(failure(403, "无权限删除此评论", "FORBIDDEN"))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session().start(TOKEN, None).unwrap();
    let err = comments::delete(&h.client, 8).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
    // Forbidden is not a session failure.
    assert!(h.session().token().unwrap().is_some());
}

#[tokio::test]
async fn test_me_and_update_me() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ok(fixtures::user_json(1, "alice")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me"))
        .and(body_json(json!({"username": "alice2"})))
        .respond_with(ok(fixtures::user_json(1, "alice2")))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session().start(TOKEN, None).unwrap();

    assert_eq!(users::me(&h.client).await.unwrap().username, "alice");
    let update = ProfileUpdate {
        username: Some("alice2".into()),
        avatar: None,
    };
    assert_eq!(
        users::update_me(&h.client, &update).await.unwrap().username,
        "alice2"
    );
}
