//! # 전시 컨트롤러

use std::sync::Arc;
use actix_web::HttpResponse;
use crate::{
    controllers::{locate_renderer, render_page},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::ListQuery,
    domain::dto::exhibitions::ExhibitionRequestDTO,
    domain::views::ExhibitionListViewDTO,
    services::exhibitions::ExhibitionService,
    services::rendering::ViewRenderer,
};

pub struct ExhibitionController {
    exhibition_service: Arc<ExhibitionService>,
    renderer: Arc<dyn ViewRenderer>,
}

register_component!(Controller, "exhibition", ExhibitionController, ExhibitionController::from_locator);

impl ExhibitionController {
    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            exhibition_service: locator.get::<ExhibitionService>()?,
            renderer: locate_renderer(locator)?,
        })
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.exhibition_service.list(query).await?;
        Ok(HttpResponse::Ok().json(list))
    }

    /// 페이지 정보 없이 전체 전시를 배열로 돌려줍니다.
    pub async fn all(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.exhibition_service.all(query.variant()?).await?;
        Ok(HttpResponse::Ok().json(list))
    }

    pub async fn get(&self, id: &str) -> AppResult<HttpResponse> {
        let exhibition = self.exhibition_service.get(id).await?;
        Ok(HttpResponse::Ok().json(exhibition))
    }

    pub async fn create(&self, request: ExhibitionRequestDTO) -> AppResult<HttpResponse> {
        let created = self.exhibition_service.create(request).await?;
        Ok(HttpResponse::Created().json(created))
    }

    pub async fn update(&self, id: &str, request: ExhibitionRequestDTO) -> AppResult<HttpResponse> {
        let updated = self.exhibition_service.update(id, request).await?;
        Ok(HttpResponse::Ok().json(updated))
    }

    pub async fn delete(&self, id: &str) -> AppResult<HttpResponse> {
        self.exhibition_service.delete(id).await?;
        Ok(HttpResponse::NoContent().finish())
    }

    /// `GET /exhibition`
    pub async fn list_page(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.exhibition_service.list(query).await?;
        render_page(self.renderer.as_ref(), &ExhibitionListViewDTO::new(list)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{body_string, locator, page_data};
    use actix_web::http::StatusCode;
    use serde_json::json;

    #[actix_web::test]
    async fn test_empty_all_is_empty_array() {
        let controller = locator().resolve_as::<ExhibitionController>("exhibition").unwrap();

        let response = controller.all(&ListQuery::default()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[actix_web::test]
    async fn test_list_page_has_default_pagination() {
        let controller = locator().resolve_as::<ExhibitionController>("exhibition").unwrap();

        let html = body_string(controller.list_page(&ListQuery::default()).await.unwrap()).await;

        assert_eq!(page_data(&html)["pagination"], json!({"currentPage": 1, "totalPages": 1, "total": 0}));
        assert!(html.contains("/static/js/exhibition/list.js"));
    }
}
