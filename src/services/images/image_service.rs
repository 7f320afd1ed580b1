//! # 이미지 URL 최적화 서비스
//!
//! CDN(Cloudinary 형식)에 올라간 이미지 URL에 변환 파라미터를 끼워 넣습니다.
//!
//! ```text
//! https://res.cloudinary.com/demo/image/upload/v1/art/blue.jpg
//!   → https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_1200/v1/art/blue.jpg
//! ```
//!
//! 설정된 CDN이 아닌 URL은 그대로 돌려주고, 빈 입력에는 빈 문자열을 돌려줍니다.

use std::sync::Arc;
use crate::{
    config::{AppConfig, ImageConfig},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::ImageUrlOptimizer,
};

const UPLOAD_SEGMENT: &str = "/upload/";

/// CDN 이미지 URL 최적화기
pub struct CdnImageOptimizer {
    config: ImageConfig,
}

register_component!(Service, "image_optimizer", CdnImageOptimizer, CdnImageOptimizer::from_locator);

impl CdnImageOptimizer {
    pub fn new(config: ImageConfig) -> Self {
        Self { config }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        let config: Arc<AppConfig> = locator.get::<AppConfig>()?;
        Ok(Self::new(config.image.clone()))
    }

    /// 설정된 CDN 호스트 아래의 URL인지 확인합니다.
    ///
    /// 접두사 뒤는 비어 있거나 `/`로 이어져야 하므로 `https://res.cloudinary.com.evil.example`
    /// 같은 호스트는 CDN으로 보지 않습니다.
    fn is_cdn_url(&self, url: &str) -> bool {
        let base = self.config.cdn_base_url.trim_end_matches('/');
        if base.is_empty() {
            return false;
        }

        url.strip_prefix(base)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    fn transformation(&self) -> String {
        format!("f_auto,q_{},w_{}", self.config.quality, self.config.default_width)
    }
}

impl ImageUrlOptimizer for CdnImageOptimizer {
    fn optimize(&self, raw_url: &str) -> String {
        let url = raw_url.trim();
        if url.is_empty() {
            return String::new();
        }

        if !self.is_cdn_url(url) {
            return url.to_string();
        }

        let Some(pos) = url.find(UPLOAD_SEGMENT) else {
            return url.to_string();
        };

        let (head, tail) = url.split_at(pos + UPLOAD_SEGMENT.len());

        // 이미 변환 파라미터가 붙은 URL
        if tail.starts_with("f_auto") {
            return url.to_string();
        }

        format!("{}{}/{}", head, self.transformation(), tail)
    }
}
