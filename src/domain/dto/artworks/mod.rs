//! # Artwork Data Transfer Objects Module
//!
//! - `ArtworkRequestDTO`: 작품 등록/수정 요청
//! - `ArtworkResponseDTO`: 관계를 제외한 작품 전체 필드
//! - `ArtworkSimpleDTO`: 카드/모달 변형 지원
//! - `ArtworkDetailDTO`: 전시, 관련 작품 포함 (이미지 최적화 적용)
//! - `ArtworkListDTO`: 페이지 정보 포함 목록

pub mod request;
pub mod response;
pub mod detail;

pub use request::*;
pub use response::*;
pub use detail::*;
