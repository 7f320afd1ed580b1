//! 대학 미술관 갤러리 백엔드
//!
//! 작품, 전시, 공지, 사용자를 관리하고 JSON API와 서버 렌더링 페이지를 제공하는
//! Rust 기반 서비스입니다. 엔티티는 DTO 계층을 거쳐서만 외부로 나갑니다.
//!
//! # Features
//!
//! - **DTO 계층**: Request DTO 검증, Simple DTO 변형(`card`/`modal`/`default`), Detail DTO 이미지 최적화
//! - **View DTO**: 모든 필드에 기본값을 가진 페이지 데이터와 셸 렌더러
//! - **컴포넌트 레지스트리**: `inventory` 기반 자동 등록과 이름 기반 컨트롤러 해석
//! - **인메모리 스토어**: JSON 시드 파일로 채울 수 있는 테이블 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← API / 페이지 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Controllers   │ ← 응답 / View DTO 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    DataStore    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use art_gallery_backend::core::registry::ServiceLocator;
//! use art_gallery_backend::controllers::ArtworkController;
//!
//! let locator = ServiceLocator::global();
//! locator.set(Arc::new(DataStore::new()));
//! locator.set(Arc::new(AppConfig::from_env()));
//! locator.initialize_all()?;
//!
//! let artworks = locator.resolve_as::<ArtworkController>("artwork")?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod controllers;
pub mod utils;
pub mod routes;
pub mod handlers;
