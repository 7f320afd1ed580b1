//! # 작품 컨트롤러
//!
//! 작품 JSON API와 작품 목록/상세 페이지를 처리합니다.

use std::sync::Arc;
use actix_web::HttpResponse;
use log::debug;
use crate::{
    controllers::{locate_renderer, render_page},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::artworks::ArtworkRequestDTO,
    domain::dto::common::ListQuery,
    domain::views::{ArtworkDetailViewDTO, ArtworkListViewDTO},
    services::artworks::ArtworkService,
    services::rendering::ViewRenderer,
    services::sharing::SharingService,
};

/// 추천 작품 API가 돌려주는 최대 개수
const FEATURED_LIMIT: usize = 8;

pub struct ArtworkController {
    artwork_service: Arc<ArtworkService>,
    sharing_service: Arc<SharingService>,
    renderer: Arc<dyn ViewRenderer>,
}

register_component!(Controller, "artwork", ArtworkController, ArtworkController::from_locator);

impl ArtworkController {
    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            artwork_service: locator.get::<ArtworkService>()?,
            sharing_service: locator.get::<SharingService>()?,
            renderer: locate_renderer(locator)?,
        })
    }

    /// `GET /api/artworks`
    pub async fn list(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.artwork_service.list(query).await?;
        Ok(HttpResponse::Ok().json(list))
    }

    /// `GET /api/artworks/featured`
    pub async fn featured(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let artworks = self.artwork_service.featured(FEATURED_LIMIT, query.variant()?).await?;
        Ok(HttpResponse::Ok().json(artworks))
    }

    /// `GET /api/artworks/{id}`
    pub async fn get(&self, id: &str) -> AppResult<HttpResponse> {
        let detail = self.artwork_service.get_detail(id).await?;
        Ok(HttpResponse::Ok().json(detail))
    }

    pub async fn create(&self, request: ArtworkRequestDTO) -> AppResult<HttpResponse> {
        let created = self.artwork_service.create(request).await?;
        Ok(HttpResponse::Created().json(created))
    }

    pub async fn update(&self, id: &str, request: ArtworkRequestDTO) -> AppResult<HttpResponse> {
        let updated = self.artwork_service.update(id, request).await?;
        Ok(HttpResponse::Ok().json(updated))
    }

    pub async fn delete(&self, id: &str) -> AppResult<HttpResponse> {
        self.artwork_service.delete(id).await?;
        Ok(HttpResponse::NoContent().finish())
    }

    /// `GET /artwork`
    pub async fn list_page(&self, query: &ListQuery) -> AppResult<HttpResponse> {
        let list = self.artwork_service.list(query).await?;
        render_page(self.renderer.as_ref(), &ArtworkListViewDTO::new(list)).await
    }

    /// `GET /artwork/{slug}`
    pub async fn detail_page(&self, slug: &str) -> AppResult<HttpResponse> {
        let artwork = self.artwork_service.get_detail_by_slug(slug).await?;
        let share = self.sharing_service.share_info(&artwork);
        debug!("작품 상세 페이지: slug={}, share={}", slug, share.url);

        render_page(self.renderer.as_ref(), &ArtworkDetailViewDTO::new(artwork, share)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{body_string, locator};
    use crate::domain::dto::RequestDto;
    use actix_web::http::StatusCode;
    use serde_json::json;

    fn request(title: &str) -> ArtworkRequestDTO {
        ArtworkRequestDTO::from_value(json!({
            "title": title,
            "artistId": "U1",
            "artistName": "Kim",
            "department": "서양화과",
            "isFeatured": true
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_resolved_by_name_once() {
        let locator = locator();

        let first = locator.resolve_as::<ArtworkController>("artwork").unwrap();
        let second = locator.resolve_as::<ArtworkController>("artwork").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[actix_web::test]
    async fn test_create_then_render_detail_page() {
        let controller = locator().resolve_as::<ArtworkController>("artwork").unwrap();

        let created = controller.create(request("Blue Hour")).await.unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let page = controller.detail_page("blue-hour").await.unwrap();
        assert_eq!(page.status(), StatusCode::OK);

        let html = body_string(page).await;
        assert!(html.contains("/static/js/artwork/detail.js"));
        assert!(html.contains("Blue Hour"));
    }

    #[actix_web::test]
    async fn test_unknown_variant_is_rejected() {
        let controller = locator().resolve_as::<ArtworkController>("artwork").unwrap();
        let query = ListQuery { view: Some("poster".to_string()), ..Default::default() };

        let err = controller.featured(&query).await.unwrap_err();
        assert!(err.is_field_error("view"));
    }

    #[actix_web::test]
    async fn test_delete_missing_is_not_found() {
        let controller = locator().resolve_as::<ArtworkController>("artwork").unwrap();

        let result = controller.delete("missing").await;
        assert!(matches!(result, Err(crate::core::errors::AppError::NotFound(_))));
    }
}
