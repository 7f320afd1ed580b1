//! # Domain Entities Module
//!
//! 저장소 계층이 돌려주는 평범한 데이터 레코드들입니다.
//! 엔티티는 필드 접근 외의 동작을 거의 가지지 않으며, 응답 모양은
//! 전부 [`dto`](crate::domain::dto) 계층이 결정합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── artworks/     ← Artwork, ArtworkExhibitionLink
//! ├── exhibitions/  ← Exhibition, ExhibitionType
//! ├── users/        ← User, UserRole
//! └── notices/      ← Notice, NoticeStatus
//! ```
//!
//! ## 기본값 규칙
//!
//! 시드 JSON이나 저장소 레코드에서 빠진 선택 필드는 `#[serde(default)]`로
//! 빈 문자열, 빈 목록, `None`, `false`가 됩니다. 명시적으로 들어온 `0`이나 `false`는
//! 그대로 유지됩니다.

pub mod artworks;
pub mod exhibitions;
pub mod users;
pub mod notices;

pub use artworks::{artwork::Artwork, ArtworkExhibitionLink};
pub use exhibitions::exhibition::{Exhibition, ExhibitionType};
pub use users::user::{User, UserRole};
pub use notices::notice::{Notice, NoticeStatus};
