//! # 공지 컨트롤러
//!
//! 공개 API/페이지는 `active` 공지만 보여주고, 관리자 API는 상태와 관계없이 다룹니다.

use std::sync::Arc;
use actix_web::HttpResponse;
use crate::{
    controllers::{locate_renderer, render_page},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::ListQuery,
    domain::dto::notices::NoticeRequestDTO,
    domain::views::{NoticeDetailViewDTO, NoticeListViewDTO},
    services::notices::NoticeService,
    services::rendering::ViewRenderer,
};

pub struct NoticeController {
    notice_service: Arc<NoticeService>,
    renderer: Arc<dyn ViewRenderer>,
}

register_component!(Controller, "notice", NoticeController, NoticeController::from_locator);

impl NoticeController {
    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            notice_service: locator.get::<NoticeService>()?,
            renderer: locate_renderer(locator)?,
        })
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.notice_service.public_list(query).await?;
        Ok(HttpResponse::Ok().json(list))
    }

    /// 공지 상세. 조회수가 증가합니다.
    pub async fn get(&self, id: &str) -> AppResult<HttpResponse> {
        let notice = self.notice_service.read(id).await?;
        Ok(HttpResponse::Ok().json(notice))
    }

    pub async fn admin_list(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.notice_service.admin_list(query).await?;
        Ok(HttpResponse::Ok().json(list))
    }

    pub async fn create(&self, request: NoticeRequestDTO) -> AppResult<HttpResponse> {
        let created = self.notice_service.create(request).await?;
        Ok(HttpResponse::Created().json(created))
    }

    pub async fn update(&self, id: &str, request: NoticeRequestDTO) -> AppResult<HttpResponse> {
        let updated = self.notice_service.update(id, request).await?;
        Ok(HttpResponse::Ok().json(updated))
    }

    pub async fn delete(&self, id: &str) -> AppResult<HttpResponse> {
        self.notice_service.delete(id).await?;
        Ok(HttpResponse::NoContent().finish())
    }

    /// `GET /notice`
    pub async fn list_page(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.notice_service.public_list(query).await?;
        render_page(self.renderer.as_ref(), &NoticeListViewDTO::new(list)).await
    }

    /// `GET /notice/{id}`
    pub async fn detail_page(&self, id: &str) -> AppResult<HttpResponse> {
        let notice = self.notice_service.read(id).await?;
        render_page(self.renderer.as_ref(), &NoticeDetailViewDTO::new(notice)).await
    }
}
