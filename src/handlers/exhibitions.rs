//! # Exhibition HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/exhibitions` | 전시 목록 (시작일 내림차순) |
//! | `GET` | `/api/exhibitions/all` | 전체 전시 배열 (페이지 정보 없음) |
//! | `GET` | `/api/exhibitions/{id}` | 전시 상세 |
//! | `POST` | `/api/admin/exhibitions` | 전시 등록 |
//! | `PUT` | `/api/admin/exhibitions/{id}` | 전시 수정 |
//! | `DELETE` | `/api/admin/exhibitions/{id}` | 전시 삭제 |

use actix_web::{web, HttpResponse, get, post, put, delete};
use serde_json::Value;
use crate::controllers::ExhibitionController;
use crate::core::errors::AppError;
use crate::domain::dto::RequestDto;
use crate::domain::dto::common::ListQuery;
use crate::domain::dto::exhibitions::ExhibitionRequestDTO;

#[get("")]
pub async fn list_exhibitions(
    controller: web::Data<ExhibitionController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list(&query).await
}

#[get("/all")]
pub async fn all_exhibitions(
    controller: web::Data<ExhibitionController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.all(&query).await
}

#[get("/{exhibition_id}")]
pub async fn get_exhibition(
    controller: web::Data<ExhibitionController>,
    exhibition_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.get(&exhibition_id).await
}

/// 전시 등록
///
/// `code`가 없으면 `{시작연도}-{제목 슬러그}` 형태로 생성하며,
/// 이미 사용 중인 코드를 지정하면 409 Conflict입니다.
///
/// ```json
/// {
///   "code": "2024-GRAD",
///   "title": "2024 졸업전시",
///   "startDate": "2024-11-01",
///   "endDate": "2024-11-15",
///   "exhibitionType": "other"
/// }
/// ```
#[post("")]
pub async fn create_exhibition(
    controller: web::Data<ExhibitionController>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.create(ExhibitionRequestDTO::from_value(payload.into_inner())?).await
}

#[put("/{exhibition_id}")]
pub async fn update_exhibition(
    controller: web::Data<ExhibitionController>,
    exhibition_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.update(&exhibition_id, ExhibitionRequestDTO::from_value(payload.into_inner())?).await
}

#[delete("/{exhibition_id}")]
pub async fn delete_exhibition(
    controller: web::Data<ExhibitionController>,
    exhibition_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.delete(&exhibition_id).await
}
