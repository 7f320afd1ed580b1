//! # 작품 리포지토리 구현
//!
//! 작품 테이블과 작품-전시 연결 테이블을 다룹니다.
//! 저장되는 작품에는 중첩 컬렉션이 없으며, 관계는 연결 테이블로만 표현됩니다.

use std::sync::Arc;
use log::debug;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    db::DataStore,
    domain::dto::common::{Page, PaginationOptions},
    domain::entities::{Artwork, ArtworkExhibitionLink},
    utils::string_utils::first_available,
};

/// 작품 데이터 액세스 리포지토리
///
/// ## 정렬 규칙
///
/// 목록은 등록일 내림차순이며, 등록일이 같으면 저장 순서를 유지합니다.
pub struct ArtworkRepository {
    store: Arc<DataStore>,
}

register_component!(Repository, "artwork_repository", ArtworkRepository, ArtworkRepository::from_locator);

impl ArtworkRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self::new(locator.get::<DataStore>()?))
    }

    fn sorted(rows: &[Artwork]) -> Vec<Artwork> {
        let mut artworks = rows.to_vec();
        artworks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        artworks
    }

    /// 작품 목록 페이지 조회
    pub async fn find_page(&self, options: &PaginationOptions) -> AppResult<Page<Artwork>> {
        let all = self.store.artworks.read(Self::sorted);
        debug!("작품 목록 조회: page={}, limit={}, total={}", options.page, options.limit, all.len());

        Ok(Page::slice(all, options))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Artwork>> {
        Ok(self.store.artworks.read(|rows| rows.iter().find(|a| a.id == id).cloned()))
    }

    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Artwork>> {
        Ok(self.store.artworks.read(|rows| rows.iter().find(|a| a.slug == slug).cloned()))
    }

    /// 추천 작품 조회
    pub async fn find_featured(&self, limit: usize) -> AppResult<Vec<Artwork>> {
        let featured = self.store.artworks.read(|rows| {
            Self::sorted(rows)
                .into_iter()
                .filter(|a| a.is_featured)
                .take(limit)
                .collect()
        });

        Ok(featured)
    }

    /// 최근 등록 작품
    pub async fn find_recent(&self, limit: usize) -> AppResult<Vec<Artwork>> {
        Ok(self.store.artworks.read(|rows| Self::sorted(rows).into_iter().take(limit).collect()))
    }

    /// 특정 사용자가 작가로 등록된 작품
    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Artwork>> {
        let artworks = self.store.artworks.read(|rows| {
            Self::sorted(rows)
                .into_iter()
                .filter(|a| a.user_id.as_deref() == Some(user_id))
                .collect()
        });

        Ok(artworks)
    }

    /// 전시에 출품된 작품 (연결 테이블 순서)
    pub async fn find_by_exhibition(&self, exhibition_id: &str) -> AppResult<Vec<Artwork>> {
        let artwork_ids: Vec<String> = self.store.artwork_exhibitions.read(|links| {
            links
                .iter()
                .filter(|link| link.exhibition_id == exhibition_id)
                .map(|link| link.artwork_id.clone())
                .collect()
        });

        let artworks = self.store.artworks.read(|rows| {
            artwork_ids
                .iter()
                .filter_map(|id| rows.iter().find(|a| &a.id == id).cloned())
                .collect()
        });

        Ok(artworks)
    }

    /// 작품이 출품된 전시 ID 목록
    pub async fn exhibition_ids_of(&self, artwork_id: &str) -> AppResult<Vec<String>> {
        Ok(self.store.artwork_exhibitions.read(|links| {
            links
                .iter()
                .filter(|link| link.artwork_id == artwork_id)
                .map(|link| link.exhibition_id.clone())
                .collect()
        }))
    }

    /// 관련 작품 조회
    ///
    /// 같은 작가의 작품을 먼저, 그다음 같은 전시에 출품된 작품을 중복 없이 반환합니다.
    pub async fn find_related(&self, artwork: &Artwork, limit: usize) -> AppResult<Vec<Artwork>> {
        let exhibition_ids = self.exhibition_ids_of(&artwork.id).await?;
        let shared_artwork_ids: Vec<String> = self.store.artwork_exhibitions.read(|links| {
            links
                .iter()
                .filter(|link| exhibition_ids.contains(&link.exhibition_id))
                .map(|link| link.artwork_id.clone())
                .collect()
        });

        let same_artist = |candidate: &Artwork| match (&artwork.user_id, &candidate.user_id) {
            (Some(a), Some(b)) => a == b,
            _ => !artwork.artist_name.is_empty() && artwork.artist_name == candidate.artist_name,
        };

        let related = self.store.artworks.read(|rows| {
            let candidates = Self::sorted(rows);
            let others = || candidates.iter().filter(|c| c.id != artwork.id);

            let by_artist = others().filter(|c| same_artist(*c));
            let by_exhibition = others().filter(|c| !same_artist(*c) && shared_artwork_ids.contains(&c.id));

            by_artist.chain(by_exhibition).take(limit).cloned().collect::<Vec<_>>()
        });

        debug!("관련 작품 조회: artwork={}, found={}", artwork.id, related.len());
        Ok(related)
    }

    /// 작품을 저장합니다.
    ///
    /// `artwork.slug`를 기준값으로 삼아, 같은 쓰기 락 안에서 비어 있는 슬러그를 배정합니다.
    pub async fn create(&self, artwork: Artwork) -> AppResult<Artwork> {
        let mut stored = artwork.without_relations();

        self.store.artworks.write(|rows| {
            stored.slug = first_available(&stored.slug, |candidate| rows.iter().any(|a| a.slug == candidate));
            rows.push(stored.clone());
        });

        Ok(stored)
    }

    /// 저장된 작품에 `apply`를 적용합니다.
    ///
    /// 읽기와 쓰기가 한 번의 쓰기 락 안에서 이뤄지며, `apply`가 슬러그를 바꾸면
    /// 다른 작품과 겹치지 않도록 접미사를 붙입니다.
    pub async fn update_with(&self, id: &str, apply: impl FnOnce(&mut Artwork)) -> AppResult<Artwork> {
        let updated = self.store.artworks.write(|rows| -> Option<Artwork> {
            let index = rows.iter().position(|a| a.id == id)?;

            let mut artwork = rows[index].clone();
            let previous_slug = artwork.slug.clone();
            apply(&mut artwork);

            if artwork.slug != previous_slug {
                artwork.slug = first_available(&artwork.slug, |candidate| {
                    rows.iter().any(|a| a.id != id && a.slug == candidate)
                });
            }

            let stored = artwork.without_relations();
            rows[index] = stored.clone();
            Some(stored)
        });

        updated.ok_or_else(|| AppError::NotFound(format!("작품을 찾을 수 없습니다: {}", id)))
    }

    /// 작품과 해당 작품의 전시 연결을 삭제합니다. 삭제 대상이 없으면 `false`.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.store.artworks.write(|rows| {
            let before = rows.len();
            rows.retain(|a| a.id != id);
            rows.len() != before
        });

        if removed {
            self.store.artwork_exhibitions.write(|links| links.retain(|link| link.artwork_id != id));
        }

        Ok(removed)
    }

    /// 작품의 전시 연결을 주어진 목록으로 교체합니다.
    pub async fn set_exhibitions(&self, artwork_id: &str, exhibition_ids: &[String]) -> AppResult<()> {
        self.store.artwork_exhibitions.write(|links| {
            links.retain(|link| link.artwork_id != artwork_id);

            for exhibition_id in exhibition_ids {
                let link = ArtworkExhibitionLink {
                    artwork_id: artwork_id.to_string(),
                    exhibition_id: exhibition_id.clone(),
                };
                if !links.contains(&link) {
                    links.push(link);
                }
            }
        });

        Ok(())
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.store.artworks.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;

    fn artwork(id: &str, artist: &str, user_id: Option<&str>) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: format!("작품 {}", id),
            slug: id.to_lowercase(),
            artist_name: artist.to_string(),
            user_id: user_id.map(str::to_string),
            ..Default::default()
        }
    }

    fn slugged(id: &str, slug: &str) -> Artwork {
        Artwork { slug: slug.to_string(), ..artwork(id, "Choi", None) }
    }

    fn link(artwork_id: &str, exhibition_id: &str) -> ArtworkExhibitionLink {
        ArtworkExhibitionLink {
            artwork_id: artwork_id.to_string(),
            exhibition_id: exhibition_id.to_string(),
        }
    }

    fn repository() -> ArtworkRepository {
        let store = DataStore::new();
        store.artworks.write(|rows| {
            rows.push(artwork("A1", "Kim", Some("U1")));
            rows.push(artwork("A2", "Kim", Some("U1")));
            rows.push(artwork("A3", "Lee", Some("U2")));
            rows.push(artwork("A4", "Park", Some("U3")));
        });
        store.artwork_exhibitions.write(|links| {
            links.push(link("A1", "E1"));
            links.push(link("A3", "E1"));
        });

        ArtworkRepository::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_find_page() {
        let repo = repository();
        let options = PaginationOptions::new(2, 3, &PaginationConfig::default());

        let page = repo.find_page(&options).await.unwrap();

        assert_eq!(page.total, 4);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "A4");
    }

    #[actix_web::test]
    async fn test_related_prefers_same_artist_then_exhibition() {
        let repo = repository();
        let source = repo.find_by_id("A1").await.unwrap().unwrap();

        let related = repo.find_related(&source, 10).await.unwrap();
        let ids: Vec<&str> = related.iter().map(|a| a.id.as_str()).collect();

        assert_eq!(ids, vec!["A2", "A3"]);
    }

    #[actix_web::test]
    async fn test_related_respects_limit() {
        let repo = repository();
        let source = repo.find_by_id("A1").await.unwrap().unwrap();

        assert_eq!(repo.find_related(&source, 1).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_allocates_free_slug() {
        let repo = repository();

        let stored = repo.create(slugged("A5", "a1")).await.unwrap();

        assert_eq!(stored.slug, "a1-2");
        assert_eq!(repo.find_by_slug("a1-2").await.unwrap().map(|a| a.id), Some("A5".to_string()));
    }

    #[actix_web::test]
    async fn test_update_with_keeps_own_slug_and_dedupes_new_one() {
        let repo = repository();

        let unchanged = repo.update_with("A1", |a| a.medium = "Ink".to_string()).await.unwrap();
        assert_eq!(unchanged.slug, "a1");
        assert_eq!(unchanged.medium, "Ink");

        let renamed = repo.update_with("A3", |a| a.slug = "a1".to_string()).await.unwrap();
        assert_eq!(renamed.slug, "a1-2");
    }

    #[test]
    fn test_concurrent_creates_never_share_slug() {
        let repo = Arc::new(repository());

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    let system = actix_web::rt::System::new();
                    for i in 0..100 {
                        let candidate = slugged(&format!("W{}-{}", worker, i), &format!("title-{}", i % 5));
                        system.block_on(repo.create(candidate)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let slugs: std::collections::HashSet<String> =
            repo.store.artworks.read(|rows| rows.iter().map(|a| a.slug.clone()).collect());
        assert_eq!(repo.store.artworks.len(), 404);
        assert_eq!(slugs.len(), 404);
    }

    #[actix_web::test]
    async fn test_set_exhibitions_replaces_links() {
        let repo = repository();

        repo.set_exhibitions("A1", &["E2".to_string(), "E2".to_string(), "E3".to_string()])
            .await
            .unwrap();

        assert_eq!(repo.exhibition_ids_of("A1").await.unwrap(), vec!["E2", "E3"]);
        assert_eq!(repo.find_by_exhibition("E1").await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_removes_links() {
        let repo = repository();

        assert!(repo.delete("A1").await.unwrap());
        assert!(!repo.delete("A1").await.unwrap());
        assert!(repo.exhibition_ids_of("A1").await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[actix_web::test]
    async fn test_update_missing_is_not_found() {
        let repo = repository();

        let result = repo.update_with("A9", |a| a.title = "없음".to_string()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_create_strips_relations() {
        let repo = repository();
        let mut created = artwork("A5", "Choi", None);
        created.related_artworks = vec![artwork("A1", "Kim", None)];

        let stored = repo.create(created).await.unwrap();

        assert!(stored.related_artworks.is_empty());
        assert!(repo.find_by_slug("a5").await.unwrap().is_some());
    }
}
