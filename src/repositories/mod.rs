//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 `register_component!`로 레지스트리에 등록되며,
//! 공유 [`DataStore`](crate::db::DataStore)를 주입받아 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::artworks::ArtworkRepository;
//!
//! let artwork_repo = locator.get::<ArtworkRepository>()?;
//! let artwork = artwork_repo.find_by_slug("blue-hour").await?;
//! ```

pub mod artworks;
pub mod exhibitions;
pub mod users;
pub mod notices;
