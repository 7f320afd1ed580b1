//! # Exhibition Data Transfer Objects Module
//!
//! - `ExhibitionRequestDTO`: 제목/시작일/종료일 필수, 종료일 ≥ 시작일
//! - `ExhibitionResponseDTO`: 전시 전체 필드
//! - `ExhibitionSimpleDTO`: 카드/모달 변형 지원
//! - `ExhibitionSimpleListDTO`: 페이지 정보 없는 배열 (`[]` 보장)
//! - `ExhibitionListDTO`: 페이지 정보 포함 목록

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
