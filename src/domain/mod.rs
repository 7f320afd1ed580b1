//! # Domain Layer Module
//!
//! 엔티티와, 엔티티를 외부로 내보내는 DTO/View DTO 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소가 돌려주는 평범한 레코드 (Artwork, Exhibition, User, Notice)
//! ├── dto       - API 계약 (Request / Response / Simple / Detail / List DTO)
//! └── views     - 페이지 렌더링 데이터 (View DTO)
//!      │
//!      ▼
//! Service Layer → Controller Layer
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! 요청 본문 ──▶ Request DTO ──check()──▶ Service ──▶ Entity
//!                                                     │
//! JSON 응답 ◀── Response/Simple/Detail/List DTO ◀─────┤
//!                                                     │
//! HTML 페이지 ◀── Renderer ◀── View DTO.to_view() ◀───┘
//! ```
//!
//! 엔티티는 직렬화 가능한 레코드일 뿐이며, 응답 필드 이름(camelCase)과
//! 중첩 구조는 전부 DTO 계층이 결정합니다.

pub mod entities;
pub mod dto;
pub mod views;
