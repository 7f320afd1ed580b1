//! # Page Handlers
//!
//! View DTO를 렌더링한 HTML(`text/html`)을 돌려주는 화면 라우트입니다.
//!
//! | 경로 | 템플릿 |
//! |------|--------|
//! | `/` | `home/index` |
//! | `/artwork` | `artwork/list` |
//! | `/artwork/{slug}` | `artwork/detail` |
//! | `/exhibition` | `exhibition/list` |
//! | `/notice` | `notice/list` |
//! | `/notice/{id}` | `notice/detail` |
//! | `/user/{id}` | `user/profile` |
//! | `/admin` | `admin/dashboard` |

use actix_web::{web, HttpResponse, get};
use crate::controllers::{
    AdminController, ArtworkController, ExhibitionController, HomeController, NoticeController, UserController,
};
use crate::core::errors::AppError;
use crate::domain::dto::common::ListQuery;

#[get("/")]
pub async fn home_page(controller: web::Data<HomeController>) -> Result<HttpResponse, AppError> {
    controller.index().await
}

#[get("/artwork")]
pub async fn artwork_list_page(
    controller: web::Data<ArtworkController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list_page(&query).await
}

#[get("/artwork/{slug}")]
pub async fn artwork_detail_page(
    controller: web::Data<ArtworkController>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.detail_page(&slug).await
}

#[get("/exhibition")]
pub async fn exhibition_list_page(
    controller: web::Data<ExhibitionController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list_page(&query).await
}

#[get("/notice")]
pub async fn notice_list_page(
    controller: web::Data<NoticeController>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    controller.list_page(&query).await
}

#[get("/notice/{notice_id}")]
pub async fn notice_detail_page(
    controller: web::Data<NoticeController>,
    notice_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.detail_page(&notice_id).await
}

#[get("/user/{user_id}")]
pub async fn user_profile_page(
    controller: web::Data<UserController>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    controller.profile_page(&user_id).await
}

#[get("/admin")]
pub async fn admin_dashboard_page(controller: web::Data<AdminController>) -> Result<HttpResponse, AppError> {
    controller.dashboard_page().await
}
