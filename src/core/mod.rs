//! # Core Framework Module
//!
//! 갤러리 백엔드 전체가 공유하는 두 가지 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입/이름 기반 싱글톤 해석
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 컴포넌트 등록
//! - **순환 참조 감지**: 생성 중인 컴포넌트를 다시 요청하면 에러
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **검증 에러 변환**: `validator` 결과를 `필드: 메시지` 형태로 변환
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use art_gallery_backend::core::registry::ServiceLocator;
//!
//! let locator = ServiceLocator::global();
//! locator.set(Arc::new(AppConfig::from_env()));
//! locator.set(Arc::new(DataStore::from_seed_path(SeedConfig::data_path().as_deref())?));
//! locator.initialize_all()?;
//!
//! let controllers = Controllers::resolve(locator)?;
//! HttpServer::new(move || App::new().configure(|cfg| configure_all_routes(cfg, &controllers)));
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for component: artwork_service
//! Configuration error: Circular dependency detected: artwork_service is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 단방향 의존성으로 변경
//!
//! ### 미등록 컴포넌트
//! ```text
//! Configuration error: No component registered under name: artwork
//! ```
//! **해결**: `register_component!` 적용 또는 `ServiceLocator::set()` 으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
