//! 애플리케이션 동작 설정
//!
//! 페이지네이션, 이미지 최적화, 공유 기능에 필요한 값들을 한 번에 읽어
//! `AppConfig`로 묶습니다. `AppConfig`는 시작 시 `ServiceLocator`에 등록되고
//! 서비스/컨트롤러는 이 값을 주입받아 사용합니다.
//!
//! ```bash
//! export PAGINATION_DEFAULT_LIMIT="12"
//! export PAGINATION_MAX_LIMIT="100"
//! export IMAGE_CDN_BASE_URL="https://res.cloudinary.com/gallery"
//! export IMAGE_DEFAULT_WIDTH="1200"
//! export IMAGE_QUALITY="auto"
//! export SHARE_CLIENT_KEY="kakao-javascript-key"
//! export SITE_BASE_URL="https://gallery.example.ac.kr"
//! ```

use super::data_config::{process_env, EnvLookup};

fn parse_positive(lookup: EnvLookup, key: &str, default: u32) -> u32 {
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => {
                log::warn!("{} 값이 올바르지 않습니다: {:?}. 기본값 {} 사용", key, raw, default);
                default
            }
        },
        None => default,
    }
}

fn non_empty(lookup: EnvLookup, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 목록 조회 페이지네이션 설정
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    /// `limit` 파라미터가 없을 때 사용하는 페이지 크기
    pub default_limit: u32,
    /// 허용하는 최대 페이지 크기
    pub max_limit: u32,
}

impl PaginationConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        let max_limit = parse_positive(lookup, "PAGINATION_MAX_LIMIT", 100);
        let default_limit = parse_positive(lookup, "PAGINATION_DEFAULT_LIMIT", 12).min(max_limit);

        Self { default_limit, max_limit }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_limit: 12, max_limit: 100 }
    }
}

/// 이미지 URL 최적화 설정
///
/// `cdn_base_url`로 시작하는 URL에만 변환 파라미터를 붙입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageConfig {
    pub cdn_base_url: String,
    pub default_width: u32,
    pub quality: String,
}

impl ImageConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        let defaults = Self::default();

        Self {
            cdn_base_url: non_empty(lookup, "IMAGE_CDN_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.cdn_base_url),
            default_width: parse_positive(lookup, "IMAGE_DEFAULT_WIDTH", defaults.default_width),
            quality: non_empty(lookup, "IMAGE_QUALITY").unwrap_or(defaults.quality),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: "https://res.cloudinary.com".to_string(),
            default_width: 1200,
            quality: "auto".to_string(),
        }
    }
}

/// 작품 공유 설정
///
/// 공유 SDK의 클라이언트 키와 공유 링크를 만들 사이트 주소입니다.
/// 키가 비어 있으면 공유 버튼은 링크 복사만 제공합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SharingConfig {
    pub client_key: String,
    pub site_base_url: String,
}

impl SharingConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        let defaults = Self::default();

        Self {
            client_key: non_empty(lookup, "SHARE_CLIENT_KEY").unwrap_or(defaults.client_key),
            site_base_url: non_empty(lookup, "SITE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_base_url),
        }
    }

    /// 사이트 상대 경로를 절대 URL로 만듭니다.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.site_base_url, path.trim_start_matches('/'))
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            client_key: String::new(),
            site_base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// 주입용 애플리케이션 설정 묶음
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub pagination: PaginationConfig,
    pub image: ImageConfig,
    pub sharing: SharingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: EnvLookup) -> Self {
        let config = Self {
            pagination: PaginationConfig::from_lookup(lookup),
            image: ImageConfig::from_lookup(lookup),
            sharing: SharingConfig::from_lookup(lookup),
        };

        log::debug!("AppConfig 로드됨: {:?}", config);
        config
    }
}
