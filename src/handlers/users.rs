//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users/{id}` | 공개 프로필 (활성 사용자만) | 200 OK |
//! | `GET` | `/api/admin/users` | 사용자 목록 | 200 OK |
//! | `POST` | `/api/admin/users` | 사용자 등록 | 201 Created |
//! | `PUT` | `/api/admin/users/{id}/active` | 활성화 상태 변경 | 200 OK |
//!
//! 이메일이 이미 등록되어 있으면 409 Conflict를 돌려줍니다.

use actix_web::{web, HttpResponse, get, post, put};
use serde_json::Value;
use crate::controllers::UserController;
use crate::core::errors::AppError;
use crate::domain::dto::RequestDto;
use crate::domain::dto::common::ListQuery;
use crate::domain::dto::users::{UserActiveRequestDTO, UserRequestDTO};

/// 사용자 조회
///
/// ```bash
/// curl http://localhost:8080/api/users/U1
/// ```
///
/// ```json
/// {
///   "id": "U1",
///   "email": "kim@example.ac.kr",
///   "name": "Kim",
///   "department": "서양화과",
///   "role": "member",
///   "profileImage": null,
///   "isActive": true,
///   "createdAt": "2024-01-01T00:00:00Z",
///   "updatedAt": "2024-01-01T00:00:00Z"
/// }
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    controller: web::Data<UserController>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.get(&user_id).await
}

#[get("")]
pub async fn list_users(
    controller: web::Data<UserController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list(&query).await
}

#[post("")]
pub async fn create_user(
    controller: web::Data<UserController>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.create(UserRequestDTO::from_value(payload.into_inner())?).await
}

/// 계정 활성화 상태 변경
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/admin/users/U1/active \
///   -H "Content-Type: application/json" -d '{"isActive": false}'
/// ```
#[put("/{user_id}/active")]
pub async fn set_user_active(
    controller: web::Data<UserController>,
    user_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    controller.set_active(&user_id, UserActiveRequestDTO::from_value(payload.into_inner())?).await
}
