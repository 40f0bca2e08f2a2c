//! Blog collection handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use fitblog_core::DomainError;
use fitblog_core::domain::{BlogId, BlogPatch};
use fitblog_core::ports::DEFAULT_LIST_LIMIT;
use fitblog_shared::dto::{BlogResponse, CreateBlogRequest, ListBlogsQuery, UpdateBlogRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /blogs?limit=<n>
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<ListBlogsQuery>,
) -> AppResult<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let posts = state.blogs.list(Some(limit)).await?;

    let body: Vec<BlogResponse> = posts.into_iter().map(BlogResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.blogs.insert(req.into()).await?;
    tracing::info!(blog_id = %post.id, "Blog created");

    Ok(HttpResponse::Created().json(BlogResponse::from(post)))
}

/// GET /blogs/{blog_id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = BlogId::parse(&path)?;

    let post = state.blogs.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
    Ok(HttpResponse::Ok().json(BlogResponse::from(post)))
}

/// PUT /blogs/{blog_id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;
    let id = BlogId::parse(&path)?;

    let patch = BlogPatch::from(req);
    if patch.is_empty() {
        return Err(DomainError::EmptyUpdate.into());
    }

    let post = state.blogs.update(id, patch).await?;
    tracing::info!(blog_id = %post.id, "Blog updated");

    Ok(HttpResponse::Ok().json(BlogResponse::from(post)))
}

/// DELETE /blogs/{blog_id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = BlogId::parse(&path)?;

    state.blogs.delete(id).await?;
    tracing::info!(blog_id = %id, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use actix_web::{App, http::StatusCode, test};
    use chrono::DateTime;
    use serde_json::{Value, json};

    use super::*;
    use crate::handlers::configure_routes;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn valid_blog(title: &str) -> Value {
        json!({
            "title": title,
            "summary": "Everything you need for a home gym",
            "content": "# Equipment\n\nStart with a pair of dumbbells.",
            "tag": "Gear",
            "image": "https://cdn.example.com/gym.jpg",
            "affiliate_label": "Buy now",
            "affiliate_url": "https://shop.example.com/dumbbells?ref=fit",
            "featured": false,
        })
    }

    #[actix_web::test]
    async fn test_create_returns_stored_fields_and_fresh_id() {
        let app = test_app!();
        let mut seen = HashSet::new();

        for title in ["Home gym basics", "Second post"] {
            let payload = valid_blog(title);
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: Value = test::read_body_json(resp).await;
            let id = body["id"].as_str().unwrap().to_string();
            assert!(!id.is_empty());
            assert!(seen.insert(id), "ids must not repeat");
            for field in [
                "title",
                "summary",
                "content",
                "tag",
                "image",
                "affiliate_label",
                "affiliate_url",
                "featured",
            ] {
                assert_eq!(body[field], payload[field], "field {field}");
            }
            assert!(body["created_at"].is_string());
        }
    }

    #[actix_web::test]
    async fn test_create_rejects_short_fields_before_storing() {
        let app = test_app!();

        for payload in [
            json!({ "title": "ab", "summary": "A long enough summary" }),
            json!({ "title": "Fine title", "summary": "short" }),
        ] {
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let body: Value = test::read_body_json(resp).await;
            assert!(!body["errors"].as_array().unwrap().is_empty());
        }

        let req = test::TestRequest::get().uri("/blogs").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, json!([]));
    }

    #[actix_web::test]
    async fn test_create_rejects_malformed_body() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": 42")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_get_returns_created_record() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Fetch me"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());
        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request_not_not_found() {
        let app = test_app!();

        let requests = [
            test::TestRequest::get().uri("/blogs/not-an-id").to_request(),
            test::TestRequest::delete().uri("/blogs/not-an-id").to_request(),
            test::TestRequest::put()
                .uri("/blogs/not-an-id")
                .set_json(json!({ "featured": true }))
                .to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["detail"], "Invalid blog id");
        }
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let app = test_app!();
        let uri = format!("/blogs/{}", BlogId::generate());

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Blog not found");

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "title": "Renamed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_empty_update_is_rejected_and_leaves_record_alone() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Untouchable"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "No fields to update");

        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_partial_update_changes_one_field_and_bumps_timestamp() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Feature me"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

        tokio::time::sleep(Duration::from_millis(5)).await;

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "featured": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;

        assert_eq!(updated["featured"], json!(true));
        for field in ["id", "title", "summary", "content", "tag", "image", "created_at"] {
            assert_eq!(updated[field], created[field], "field {field}");
        }

        let before = DateTime::parse_from_rfc3339(created["updated_at"].as_str().unwrap()).unwrap();
        let after = DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap()).unwrap();
        assert!(after > before);
    }

    #[actix_web::test]
    async fn test_update_clears_nullable_field_and_writes_empty_string() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Retag me"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "image": null, "tag": "" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["image"], Value::Null);
        assert_eq!(updated["tag"], json!(""));
        assert_eq!(updated["content"], created["content"]);
    }

    #[actix_web::test]
    async fn test_update_validates_present_fields() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Validate me"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "affiliate_url": "not a url" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_update_accepts_short_title_and_ignores_null_title() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Long enough title"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "title": "ab", "summary": "tiny" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "ab");
        assert_eq!(body["summary"], "tiny");

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "title": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "No fields to update");

        let req = test::TestRequest::get().uri(&uri).to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored["title"], "ab");
    }

    #[actix_web::test]
    async fn test_delete_twice() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_blog("Delete me"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_respects_limit() {
        let app = test_app!();
        for title in ["First post", "Second post", "Third post"] {
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(valid_blog(title))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/blogs?limit=1").to_request();
        let limited: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(limited.as_array().unwrap().len(), 1);
        assert_eq!(limited[0]["title"], "First post");

        let req = test::TestRequest::get().uri("/blogs").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = all
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["First post", "Second post", "Third post"]);
    }

    #[actix_web::test]
    async fn test_list_rejects_non_numeric_limit() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/blogs?limit=lots").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
