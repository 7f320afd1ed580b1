//! In-Process Data Store Module
//!
//! 갤러리 데이터를 메모리에 보관하는 저장소입니다. 실제 관계형 데이터베이스 대신
//! 리포지토리 계층이 사용하는 테이블 집합을 제공하며, 시작 시 JSON 시드 파일로
//! 초기 데이터를 적재할 수 있습니다.
//!
//! # 시드 파일 형식
//!
//! ```json
//! {
//!   "artworks": [{ "id": "A1", "title": "Blue Hour", "slug": "blue-hour", "artistName": "Kim" }],
//!   "exhibitions": [{ "id": "E1", "code": "2024-GRAD", "title": "졸업전", "startDate": "2024-11-01" }],
//!   "artworkExhibitions": [{ "artworkId": "A1", "exhibitionId": "E1" }],
//!   "users": [{ "id": "U1", "email": "kim@example.ac.kr", "name": "Kim", "role": "member" }],
//!   "notices": [{ "id": "N1", "title": "전시 안내", "content": "...", "author": "U1", "authorName": "Kim" }]
//! }
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use art_gallery_backend::db::DataStore;
//! use art_gallery_backend::core::registry::ServiceLocator;
//!
//! let store = DataStore::from_seed_path(SeedConfig::data_path().as_deref())?;
//! ServiceLocator::global().set(Arc::new(store));
//! ```

use std::sync::{PoisonError, RwLock};
use log::info;
use serde::Deserialize;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::{Artwork, ArtworkExhibitionLink, Exhibition, Notice, User};

/// 하나의 레코드 목록을 보호하는 테이블
///
/// 삽입 순서를 유지하며, 락이 오염되어도 내부 데이터를 그대로 사용합니다.
#[derive(Debug)]
pub struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Table<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows: RwLock::new(rows) }
    }

    /// 읽기 락을 잡은 상태로 `f`를 실행합니다.
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        f(&rows)
    }

    /// 쓰기 락을 잡은 상태로 `f`를 실행합니다.
    pub fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut rows)
    }

    pub fn len(&self) -> usize {
        self.read(|rows| rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 시드 데이터 파일 구조
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub artworks: Vec<Artwork>,
    pub exhibitions: Vec<Exhibition>,
    pub artwork_exhibitions: Vec<ArtworkExhibitionLink>,
    pub users: Vec<User>,
    pub notices: Vec<Notice>,
}

/// 갤러리 데이터 저장소
///
/// `ServiceLocator`에 직접 등록되며 모든 리포지토리가 공유합니다.
#[derive(Debug, Default)]
pub struct DataStore {
    pub artworks: Table<Artwork>,
    pub exhibitions: Table<Exhibition>,
    pub artwork_exhibitions: Table<ArtworkExhibitionLink>,
    pub users: Table<User>,
    pub notices: Table<Notice>,
}

impl DataStore {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 시드 데이터로 저장소를 생성합니다.
    ///
    /// 저장된 작품에는 중첩 컬렉션(전시, 관련 작품)을 남기지 않습니다.
    pub fn from_seed(seed: SeedData) -> Self {
        let artworks: Vec<Artwork> = seed.artworks.iter().map(Artwork::without_relations).collect();

        let store = Self {
            artworks: Table::new(artworks),
            exhibitions: Table::new(seed.exhibitions),
            artwork_exhibitions: Table::new(seed.artwork_exhibitions),
            users: Table::new(seed.users),
            notices: Table::new(seed.notices),
        };

        info!(
            "🗂️ 데이터 스토어 적재: 작품 {}, 전시 {}, 사용자 {}, 공지 {}",
            store.artworks.len(),
            store.exhibitions.len(),
            store.users.len(),
            store.notices.len()
        );

        store
    }

    /// JSON 문자열에서 저장소를 생성합니다.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let seed: SeedData = serde_json::from_str(json).context("시드 데이터 파싱 실패")?;
        Ok(Self::from_seed(seed))
    }

    /// 시드 파일 경로가 있으면 읽어서, 없으면 빈 저장소를 생성합니다.
    pub fn from_seed_path(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(path) => {
                info!("📄 시드 파일 로드: {}", path);
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("시드 파일 읽기 실패 ({})", path))?;
                Self::from_json(&json)
            }
            None => {
                info!("시드 파일 없음, 빈 데이터 스토어로 시작합니다");
                Ok(Self::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    const SEED: &str = r#"{
        "artworks": [
            { "id": "A1", "title": "Blue Hour", "slug": "blue-hour", "artistName": "Kim",
              "relatedArtworks": [{ "id": "A2", "title": "Dawn" }] }
        ],
        "exhibitions": [{ "id": "E1", "code": "2024-GRAD", "title": "졸업전" }],
        "artworkExhibitions": [{ "artworkId": "A1", "exhibitionId": "E1" }],
        "users": [{ "id": "U1", "email": "kim@example.ac.kr", "name": "Kim" }]
    }"#;

    #[test]
    fn test_from_json_loads_every_table() {
        let store = DataStore::from_json(SEED).unwrap();

        assert_eq!(store.artworks.len(), 1);
        assert_eq!(store.exhibitions.len(), 1);
        assert_eq!(store.artwork_exhibitions.len(), 1);
        assert_eq!(store.users.len(), 1);
        assert!(store.notices.is_empty());
    }

    #[test]
    fn test_seeded_artworks_drop_nested_collections() {
        let store = DataStore::from_json(SEED).unwrap();

        store.artworks.read(|rows| assert!(rows[0].related_artworks.is_empty()));
    }

    #[test]
    fn test_invalid_json_is_internal_error() {
        let result = DataStore::from_json("{ not json");

        assert!(matches!(result, Err(AppError::InternalError(msg)) if msg.contains("시드 데이터")));
    }

    #[test]
    fn test_missing_seed_file_is_error() {
        let result = DataStore::from_seed_path(Some("/definitely/not/here.json"));

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_no_seed_path_gives_empty_store() {
        let store = DataStore::from_seed_path(None).unwrap();

        assert!(store.artworks.is_empty());
    }

    #[test]
    fn test_table_write_then_read() {
        let table: Table<u32> = Table::default();
        table.write(|rows| rows.extend([3, 1, 2]));

        assert_eq!(table.read(|rows| rows.to_vec()), vec![3, 1, 2]);
    }
}
