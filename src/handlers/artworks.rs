//! # Artwork HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/artworks` | 작품 목록 (`?page&limit&view`) | 200 OK |
//! | `GET` | `/api/artworks/featured` | 추천 작품 (`?view`) | 200 OK |
//! | `GET` | `/api/artworks/{id}` | 작품 상세 | 200 OK |
//! | `POST` | `/api/admin/artworks` | 작품 등록 | 201 Created |
//! | `PUT` | `/api/admin/artworks/{id}` | 작품 수정 | 200 OK |
//! | `DELETE` | `/api/admin/artworks/{id}` | 작품 삭제 | 204 No Content |

use actix_web::{web, HttpResponse, get, post, put, delete};
use serde_json::Value;
use crate::controllers::ArtworkController;
use crate::core::errors::AppError;
use crate::domain::dto::RequestDto;
use crate::domain::dto::artworks::ArtworkRequestDTO;
use crate::domain::dto::common::ListQuery;

/// 작품 목록
///
/// ```bash
/// curl "http://localhost:8080/api/artworks?page=2&limit=12&view=card"
/// ```
///
/// ```json
/// {
///   "items": [{ "id": "A1", "title": "Blue Hour", "slug": "blue-hour", "imageUrl": null,
///               "artistName": "Kim", "type": "artwork", "medium": "Oil", "year": 2024 }],
///   "total": 13, "page": 2, "totalPages": 2
/// }
/// ```
#[get("")]
pub async fn list_artworks(
    controller: web::Data<ArtworkController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list(&query).await
}

#[get("/featured")]
pub async fn featured_artworks(
    controller: web::Data<ArtworkController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.featured(&query).await
}

/// 작품 상세. 출품 전시와 관련 작품이 포함되며 모든 이미지 URL은 최적화되어 있습니다.
#[get("/{artwork_id}")]
pub async fn get_artwork(
    controller: web::Data<ArtworkController>,
    artwork_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.get(&artwork_id).await
}

/// 작품 등록
///
/// ```bash
/// curl -X POST http://localhost:8080/api/admin/artworks \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Blue Hour","artistId":"U1","artistName":"Kim","department":"서양화과","exhibitionIds":["E1"]}'
/// ```
#[post("")]
pub async fn create_artwork(
    controller: web::Data<ArtworkController>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.create(ArtworkRequestDTO::from_value(payload.into_inner())?).await
}

#[put("/{artwork_id}")]
pub async fn update_artwork(
    controller: web::Data<ArtworkController>,
    artwork_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.update(&artwork_id, ArtworkRequestDTO::from_value(payload.into_inner())?).await
}

#[delete("/{artwork_id}")]
pub async fn delete_artwork(
    controller: web::Data<ArtworkController>,
    artwork_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.delete(&artwork_id).await
}
