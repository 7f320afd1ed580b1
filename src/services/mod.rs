//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 `register_component!`로 레지스트리에 등록되며,
//! 필요한 리포지토리와 설정을 로케이터에서 주입받습니다.
//!
//! # Features
//!
//! - 작품/전시/공지/사용자 관리
//! - CDN 이미지 URL 최적화
//! - 작품 공유 정보 생성
//! - View DTO 페이지 렌더링
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::artworks::ArtworkService;
//!
//! let artwork_service = locator.get::<ArtworkService>()?;
//! let detail = artwork_service.get_detail_by_slug("blue-hour").await?;
//! ```

pub mod artworks;
pub mod exhibitions;
pub mod notices;
pub mod users;
pub mod images;
pub mod sharing;
pub mod rendering;
