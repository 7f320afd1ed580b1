//! # Notice HTTP Handlers
//!
//! 공개 목록/상세는 `active` 공지만, 관리자 목록은 모든 공지를 돌려줍니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use serde_json::Value;
use crate::controllers::NoticeController;
use crate::core::errors::AppError;
use crate::domain::dto::RequestDto;
use crate::domain::dto::common::ListQuery;
use crate::domain::dto::notices::NoticeRequestDTO;

#[get("")]
pub async fn list_notices(
    controller: web::Data<NoticeController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list(&query).await
}

/// 공지 상세 (조회수 1 증가)
#[get("/{notice_id}")]
pub async fn get_notice(
    controller: web::Data<NoticeController>,
    notice_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.get(&notice_id).await
}

#[get("")]
pub async fn admin_list_notices(
    controller: web::Data<NoticeController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.admin_list(&query).await
}

/// 공지 등록
///
/// ```json
/// {
///   "title": "전시 일정 안내",
///   "content": "...",
///   "author": "U1",
///   "authorName": "관리자",
///   "isImportant": true,
///   "status": "active"
/// }
/// ```
#[post("")]
pub async fn create_notice(
    controller: web::Data<NoticeController>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.create(NoticeRequestDTO::from_value(payload.into_inner())?).await
}

#[put("/{notice_id}")]
pub async fn update_notice(
    controller: web::Data<NoticeController>,
    notice_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.update(&notice_id, NoticeRequestDTO::from_value(payload.into_inner())?).await
}

#[delete("/{notice_id}")]
pub async fn delete_notice(
    controller: web::Data<NoticeController>,
    notice_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.delete(&notice_id).await
}
