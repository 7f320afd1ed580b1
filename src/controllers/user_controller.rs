//! # 사용자 컨트롤러
//!
//! 공개 프로필(API/페이지)과 관리자용 사용자 관리 API를 처리합니다.

use std::sync::Arc;
use actix_web::HttpResponse;
use crate::{
    controllers::{locate_renderer, render_page},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::ListQuery,
    domain::dto::users::{UserActiveRequestDTO, UserRequestDTO},
    domain::views::UserProfileViewDTO,
    services::artworks::ArtworkService,
    services::rendering::ViewRenderer,
    services::users::UserService,
};

pub struct UserController {
    user_service: Arc<UserService>,
    artwork_service: Arc<ArtworkService>,
    renderer: Arc<dyn ViewRenderer>,
}

register_component!(Controller, "user", UserController, UserController::from_locator);

impl UserController {
    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            user_service: locator.get::<UserService>()?,
            artwork_service: locator.get::<ArtworkService>()?,
            renderer: locate_renderer(locator)?,
        })
    }

    /// `GET /api/users/{id}` (활성 사용자만)
    pub async fn get(&self, id: &str) -> AppResult<HttpResponse> {
        let user = self.user_service.get_active(id).await?;
        Ok(HttpResponse::Ok().json(user))
    }

    /// `GET /api/admin/users`
    pub async fn list(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.user_service.list(query).await?;
        Ok(HttpResponse::Ok().json(list))
    }

    pub async fn create(&self, request: UserRequestDTO) -> AppResult<HttpResponse> {
        let created = self.user_service.create(request).await?;
        Ok(HttpResponse::Created().json(created))
    }

    /// `PUT /api/admin/users/{id}/active`
    pub async fn set_active(&self, id: &str, request: UserActiveRequestDTO) -> AppResult<HttpResponse> {
        let updated = self.user_service.set_active(id, request).await?;
        Ok(HttpResponse::Ok().json(updated))
    }

    /// `GET /user/{id}`
    pub async fn profile_page(&self, id: &str) -> AppResult<HttpResponse> {
        let user = self.user_service.get_active(id).await?;
        let artworks = self.artwork_service.by_user(&user.id).await?;

        render_page(self.renderer.as_ref(), &UserProfileViewDTO::new(user, artworks)).await
    }
}
