//! # Notice Data Transfer Objects Module
//!
//! - `NoticeRequestDTO`: 제목/내용/작성자/작성자 이름 필수, 상태 `active | inactive`
//! - `NoticeResponseDTO`: 공지 전체 필드
//! - `NoticeSimpleDTO`: 목록용 축약 표현
//! - `NoticeListDTO`: 페이지 정보 포함 목록

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
