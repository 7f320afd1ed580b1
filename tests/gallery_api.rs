//! 시드된 인메모리 스토어 위에서 전체 라우터를 구동하는 통합 테스트

use std::sync::Arc;
use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use serde_json::{json, Value};
use art_gallery_backend::config::AppConfig;
use art_gallery_backend::controllers::ArtworkController;
use art_gallery_backend::core::registry::ServiceLocator;
use art_gallery_backend::db::DataStore;
use art_gallery_backend::routes::{configure_all_routes, Controllers};

const SEED: &str = r#"{
    "users": [
        { "id": "U1", "email": "kim@example.ac.kr", "name": "Kim", "department": "서양화과", "role": "member" },
        { "id": "U2", "email": "lee@example.ac.kr", "name": "Lee", "department": "조소과", "isActive": false }
    ],
    "exhibitions": [
        { "id": "E1", "code": "2024-GRAD", "title": "2024 졸업전시",
          "startDate": "2024-11-01", "endDate": "2024-11-15" },
        { "id": "E2", "code": "2023-SPRING", "title": "봄 정기전",
          "startDate": "2023-03-01", "endDate": "2023-03-20", "exhibitionType": "other" }
    ],
    "artworks": [
        { "id": "A1", "title": "Blue Hour", "slug": "blue-hour", "userId": "U1", "artistName": "Kim",
          "medium": "Oil on canvas", "year": 2024, "isFeatured": true,
          "imageUrl": "https://res.cloudinary.com/demo/image/upload/v1/blue.jpg",
          "createdAt": "2024-11-02T00:00:00Z" },
        { "id": "A2", "title": "Dawn", "slug": "dawn", "userId": "U1", "artistName": "Kim",
          "createdAt": "2024-11-01T00:00:00Z" },
        { "id": "A3", "title": "Ink", "slug": "ink", "userId": "U3", "artistName": "Park",
          "createdAt": "2024-10-01T00:00:00Z" }
    ],
    "artworkExhibitions": [
        { "artworkId": "A1", "exhibitionId": "E1" },
        { "artworkId": "A3", "exhibitionId": "E1" }
    ],
    "notices": [
        { "id": "N1", "title": "전시 안내", "content": "본문", "author": "U1", "authorName": "관리자",
          "isImportant": true, "status": "active", "createdAt": "2024-11-01T00:00:00Z" },
        { "id": "N2", "title": "내부 공지", "content": "본문", "author": "U1", "authorName": "관리자",
          "status": "inactive", "createdAt": "2024-11-03T00:00:00Z" }
    ]
}"#;

fn seeded_locator() -> ServiceLocator {
    let locator = ServiceLocator::new();
    locator.set(Arc::new(DataStore::from_json(SEED).unwrap()));
    locator.set(Arc::new(AppConfig::default()));
    locator.initialize_all().unwrap();
    locator
}

macro_rules! gallery_app {
    () => {{
        let controllers = Controllers::resolve(&seeded_locator()).unwrap();
        test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &controllers))).await
    }};
}

/// GET 요청을 보내고 `(상태 코드, JSON 본문)`을 돌려줍니다.
macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let resp = test::call_service($app, test::TestRequest::get().uri($uri).to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_health_check() {
    let app = gallery_app!();

    let (status, body) = get_json!(&app, "/health");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_controllers_resolve_to_same_instance() {
    let locator = seeded_locator();

    let first = Controllers::resolve(&locator).unwrap();
    let second = Controllers::resolve(&locator).unwrap();

    assert!(Arc::ptr_eq(&first.artwork, &second.artwork));
    assert!(Arc::ptr_eq(&first.artwork, &locator.resolve_as::<ArtworkController>("artwork").unwrap()));
}

#[actix_web::test]
async fn test_artwork_list_with_card_variant() {
    let app = gallery_app!();

    let (status, body) = get_json!(&app, "/api/artworks?view=card&limit=2");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["items"][0]["id"], "A1");
    assert_eq!(body["items"][0]["type"], "artwork");
    assert_eq!(body["items"][0]["medium"], "Oil on canvas");
}

#[actix_web::test]
async fn test_default_variant_has_no_type() {
    let app = gallery_app!();

    let (_, body) = get_json!(&app, "/api/artworks");

    assert!(body["items"][0].get("type").is_none());
    assert_eq!(body["page"], 1);
}

#[actix_web::test]
async fn test_bad_list_query_is_bad_request() {
    let app = gallery_app!();

    let (status, body) = get_json!(&app, "/api/artworks?limit=abc");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("limit"));

    let (status, body) = get_json!(&app, "/api/artworks/featured?view=poster");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("view"));
}

#[actix_web::test]
async fn test_artwork_detail_embeds_relations() {
    let app = gallery_app!();

    let (status, body) = get_json!(&app, "/api/artworks/A1");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["imageUrl"],
        "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_1200/v1/blue.jpg"
    );
    assert_eq!(body["exhibitions"][0]["id"], "E1");
    assert_eq!(body["exhibitions"][0]["type"], "exhibition");

    let related: Vec<&str> = body["relatedArtworks"]
        .as_array()
        .map(|items| items.iter().filter_map(|a| a["id"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(related, vec!["A2", "A3"]);
}

#[actix_web::test]
async fn test_featured_artworks() {
    let app = gallery_app!();

    let (status, body) = get_json!(&app, "/api/artworks/featured?view=modal");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["artistAffiliation"], "");
}

#[actix_web::test]
async fn test_missing_artwork_is_not_found() {
    let app = gallery_app!();

    let (status, _) = get_json!(&app, "/api/artworks/missing");

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_artwork_validates_and_dedupes_slug() {
    let app = gallery_app!();

    let invalid = test::TestRequest::post()
        .uri("/api/admin/artworks")
        .set_json(json!({ "artistId": "U1", "artistName": "Kim", "department": "서양화과" }))
        .to_request();
    let resp = test::call_service(&app, invalid).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("title"));

    let valid = test::TestRequest::post()
        .uri("/api/admin/artworks")
        .set_json(json!({
            "title": "Blue Hour",
            "artistId": "U1",
            "artistName": "Kim",
            "department": "서양화과",
            "exhibitionIds": ["E1"]
        }))
        .to_request();
    let resp = test::call_service(&app, valid).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["slug"], "blue-hour-2");
}

#[actix_web::test]
async fn test_unknown_exhibition_link_is_rejected() {
    let app = gallery_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/artworks")
        .set_json(json!({
            "title": "Night",
            "artistId": "U1",
            "artistName": "Kim",
            "department": "서양화과",
            "exhibitionIds": ["E9"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = gallery_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/notices")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("body"));
}

#[actix_web::test]
async fn test_wrong_field_type_names_field() {
    let app = gallery_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/notices")
        .set_json(json!({ "title": 5, "content": "본문", "author": "U1", "authorName": "관리자" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("title:"));

    let req = test::TestRequest::post()
        .uri("/api/admin/exhibitions")
        .set_json(json!({ "title": "윤년 전시", "startDate": "2024-02-30", "endDate": "2024-03-10" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("startDate:"));
}

#[actix_web::test]
async fn test_delete_artwork() {
    let app = gallery_app!();

    let delete = |uri: &str| test::TestRequest::delete().uri(uri).to_request();

    let resp = test::call_service(&app, delete("/api/admin/artworks/A2")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, delete("/api/admin/artworks/A2")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_exhibitions_sorted_by_start_date() {
    let app = gallery_app!();

    let (status, body) = get_json!(&app, "/api/exhibitions?view=modal");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["code"], "2024-GRAD");
    assert_eq!(body["items"][1]["exhibitionType"], "other");

    let (_, all) = get_json!(&app, "/api/exhibitions/all");
    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_create_exhibition_rules() {
    let app = gallery_app!();

    let duplicate = test::TestRequest::post()
        .uri("/api/admin/exhibitions")
        .set_json(json!({
            "code": "2024-GRAD", "title": "다른 전시", "startDate": "2024-12-01", "endDate": "2024-12-10"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, duplicate).await.status(), StatusCode::CONFLICT);

    let reversed = test::TestRequest::post()
        .uri("/api/admin/exhibitions")
        .set_json(json!({ "title": "역순 전시", "startDate": "2024-12-10", "endDate": "2024-12-01" }))
        .to_request();
    let resp = test::call_service(&app, reversed).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("endDate"));
}

#[actix_web::test]
async fn test_public_notices_hide_inactive_and_count_views() {
    let app = gallery_app!();

    let (_, list) = get_json!(&app, "/api/notices");
    assert_eq!(list["total"], 1);
    assert_eq!(list["items"][0]["id"], "N1");

    let (status, _) = get_json!(&app, "/api/notices/N2");
    assert_eq!(status, StatusCode::NOT_FOUND);

    get_json!(&app, "/api/notices/N1");
    let (_, notice) = get_json!(&app, "/api/notices/N1");
    assert_eq!(notice["views"], 2);

    let (_, admin) = get_json!(&app, "/api/admin/notices");
    assert_eq!(admin["total"], 2);
}

#[actix_web::test]
async fn test_user_endpoints() {
    let app = gallery_app!();

    let (status, _) = get_json!(&app, "/api/users/U2");
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, user) = get_json!(&app, "/api/users/U1");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["department"], "서양화과");

    let duplicate = test::TestRequest::post()
        .uri("/api/admin/users")
        .set_json(json!({ "email": "KIM@example.ac.kr", "name": "Kim", "department": "서양화과" }))
        .to_request();
    assert_eq!(test::call_service(&app, duplicate).await.status(), StatusCode::CONFLICT);

    let deactivate = test::TestRequest::put()
        .uri("/api/admin/users/U1/active")
        .set_json(json!({ "isActive": false }))
        .to_request();
    let resp = test::call_service(&app, deactivate).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isActive"], false);

    let (_, list) = get_json!(&app, "/api/admin/users?view=modal");
    assert_eq!(list["total"], 2);
    assert_eq!(list["items"][0]["type"], "user");
}

#[actix_web::test]
async fn test_pages_render_html() {
    let app = gallery_app!();

    for (uri, script) in [
        ("/", "/static/js/home/index.js"),
        ("/artwork", "/static/js/artwork/list.js"),
        ("/artwork/blue-hour", "/static/js/artwork/detail.js"),
        ("/exhibition", "/static/js/exhibition/list.js"),
        ("/notice", "/static/js/notice/list.js"),
        ("/notice/N1", "/static/js/notice/detail.js"),
        ("/user/U1", "/static/js/user/profile.js"),
        ("/admin", "/static/js/admin/dashboard.js"),
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "{}", uri);

        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains(script), "{}", uri);
    }
}

#[actix_web::test]
async fn test_artwork_page_carries_share_info() {
    let app = gallery_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/artwork/blue-hour").to_request()).await;
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();

    assert!(html.contains(r#""url":"http://localhost:8080/artwork/blue-hour""#));

    let missing = test::call_service(&app, test::TestRequest::get().uri("/artwork/missing").to_request()).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
