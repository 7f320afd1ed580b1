//! # Configuration Module
//!
//! 환경 변수 기반 설정을 타입이 있는 구조체로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS, 시드 데이터
//! - [`app_config`] - 페이지네이션, 이미지 최적화, 공유 설정 (`AppConfig`로 주입)
//!
//! 모든 설정 함수는 `*_from(lookup)` 형태의 변형을 가지고 있어서
//! 테스트에서 프로세스 환경 변수를 건드리지 않고 값을 주입할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use art_gallery_backend::config::{AppConfig, ServerConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let config = AppConfig::from_env();
//! println!("page size: {}", config.pagination.default_limit);
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! export CORS_ALLOWED_ORIGINS="https://gallery.example.ac.kr"
//! export SEED_DATA_PATH="seed/gallery.json"
//! ```

pub mod data_config;
pub mod app_config;

pub use data_config::*;
pub use app_config::*;
