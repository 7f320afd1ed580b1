//! # 공유 정보 서비스
//!
//! 작품 상세 페이지의 공유 버튼이 사용하는 정보를 만듭니다.
//! 클라이언트 키와 사이트 주소는 `SharingConfig`에서 주입받습니다.

use std::sync::Arc;
use crate::{
    config::{AppConfig, SharingConfig},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::artworks::ArtworkDetailDTO,
    domain::views::ShareInfo,
};

pub struct SharingService {
    config: SharingConfig,
}

register_component!(Service, "sharing_service", SharingService, SharingService::from_locator);

impl SharingService {
    pub fn new(config: SharingConfig) -> Self {
        Self { config }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        let config: Arc<AppConfig> = locator.get::<AppConfig>()?;
        Ok(Self::new(config.sharing.clone()))
    }

    /// 작품 상세 페이지 URL (슬러그는 퍼센트 인코딩)
    pub fn artwork_url(&self, slug: &str) -> String {
        self.config
            .absolute_url(&format!("/artwork/{}", urlencoding::encode(slug)))
    }

    pub fn share_info(&self, artwork: &ArtworkDetailDTO) -> ShareInfo {
        ShareInfo {
            client_key: self.config.client_key.clone(),
            url: self.artwork_url(&artwork.slug),
            title: artwork.title.clone(),
            image_url: artwork.image_url.clone(),
        }
    }
}
