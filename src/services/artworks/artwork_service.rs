//! # 작품 관리 서비스 구현
//!
//! 작품 조회/등록/수정/삭제 비즈니스 로직입니다.
//!
//! ## 주요 규칙
//!
//! - **슬러그 생성**: 제목에서 슬러그를 만들고, 이미 사용 중이면 저장 시점에 `-2`, `-3` … 접미사를 붙입니다.
//! - **전시 연결**: 요청의 `exhibitionIds`는 모두 존재하는 전시여야 합니다.
//! - **상세 조회**: 출품 전시와 관련 작품을 채운 뒤 이미지 URL을 최적화한 Detail DTO를 반환합니다.

use std::sync::Arc;
use log::{debug, info, warn};
use crate::{
    config::{AppConfig, PaginationConfig},
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    domain::dto::artworks::{ArtworkDetailDTO, ArtworkListDTO, ArtworkRequestDTO, ArtworkResponseDTO, ArtworkSimpleDTO},
    domain::dto::common::{ListQuery, PaginationOptions, SimpleVariant},
    domain::dto::RequestDto,
    domain::entities::Artwork,
    repositories::artworks::ArtworkRepository,
    repositories::exhibitions::ExhibitionRepository,
    services::images::CdnImageOptimizer,
    utils::string_utils::{slugify, validate_required_string},
};

/// 상세 페이지에 보여줄 관련 작품 수
const RELATED_LIMIT: usize = 4;

/// 슬러그로 만들 수 없는 제목일 때 사용하는 기본 슬러그
const FALLBACK_SLUG: &str = "artwork";

pub struct ArtworkService {
    artwork_repo: Arc<ArtworkRepository>,
    exhibition_repo: Arc<ExhibitionRepository>,
    optimizer: Arc<CdnImageOptimizer>,
    pagination: PaginationConfig,
}

register_component!(Service, "artwork_service", ArtworkService, ArtworkService::from_locator);

impl ArtworkService {
    pub fn new(
        artwork_repo: Arc<ArtworkRepository>,
        exhibition_repo: Arc<ExhibitionRepository>,
        optimizer: Arc<CdnImageOptimizer>,
        pagination: PaginationConfig,
    ) -> Self {
        Self { artwork_repo, exhibition_repo, optimizer, pagination }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        let config = locator.get::<AppConfig>()?;

        Ok(Self::new(
            locator.get::<ArtworkRepository>()?,
            locator.get::<ExhibitionRepository>()?,
            locator.get::<CdnImageOptimizer>()?,
            config.pagination.clone(),
        ))
    }

    /// 작품 목록 (페이지네이션 + 변형)
    pub async fn list(&self, query: &ListQuery) -> AppResult<ArtworkListDTO> {
        let options = PaginationOptions::from_list_query(query, &self.pagination)?;
        let variant = query.variant()?;

        let page = self.artwork_repo.find_page(&options).await?;
        Ok(ArtworkListDTO::from_page(&page, variant))
    }

    pub async fn featured(&self, limit: usize, variant: SimpleVariant) -> AppResult<Vec<ArtworkSimpleDTO>> {
        let artworks = self.artwork_repo.find_featured(limit).await?;
        Ok(artworks.iter().map(|a| ArtworkSimpleDTO::new(a, variant)).collect())
    }

    pub async fn recent(&self, limit: usize) -> AppResult<Vec<ArtworkSimpleDTO>> {
        let artworks = self.artwork_repo.find_recent(limit).await?;
        Ok(artworks.iter().map(|a| ArtworkSimpleDTO::new(a, SimpleVariant::Card)).collect())
    }

    /// 사용자가 작가로 등록된 작품
    pub async fn by_user(&self, user_id: &str) -> AppResult<Vec<ArtworkSimpleDTO>> {
        let artworks = self.artwork_repo.find_by_user(user_id).await?;
        Ok(artworks.iter().map(|a| ArtworkSimpleDTO::new(a, SimpleVariant::Card)).collect())
    }

    pub async fn get_detail(&self, id: &str) -> AppResult<ArtworkDetailDTO> {
        let id = validate_required_string(id, "id")?;
        let artwork = self
            .artwork_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("작품을 찾을 수 없습니다: {}", id)))?;

        self.build_detail(artwork).await
    }

    pub async fn get_detail_by_slug(&self, slug: &str) -> AppResult<ArtworkDetailDTO> {
        let artwork = self
            .artwork_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("작품을 찾을 수 없습니다: {}", slug)))?;

        self.build_detail(artwork).await
    }

    /// 관계를 채운 뒤 Detail DTO로 변환합니다.
    async fn build_detail(&self, mut artwork: Artwork) -> AppResult<ArtworkDetailDTO> {
        let exhibition_ids = self.artwork_repo.exhibition_ids_of(&artwork.id).await?;
        artwork.exhibitions = self.exhibition_repo.find_by_ids(&exhibition_ids).await?;
        artwork.related_artworks = self.artwork_repo.find_related(&artwork, RELATED_LIMIT).await?;

        debug!(
            "작품 상세 구성: id={}, exhibitions={}, related={}",
            artwork.id,
            artwork.exhibitions.len(),
            artwork.related_artworks.len()
        );

        Ok(ArtworkDetailDTO::new(&artwork, self.optimizer.as_ref()))
    }

    pub async fn create(&self, request: ArtworkRequestDTO) -> AppResult<ArtworkResponseDTO> {
        request.check()?;
        self.ensure_exhibitions_exist(&request.exhibition_ids).await?;

        let mut artwork = Artwork::new(request.title.clone(), request.artist_name.clone());
        artwork.slug = base_slug(&request.title);
        apply_request(&mut artwork, &request);

        let created = self.artwork_repo.create(artwork).await?;
        self.artwork_repo.set_exhibitions(&created.id, &request.exhibition_ids).await?;

        info!("🖼️ 작품 등록: id={}, slug={}", created.id, created.slug);
        Ok(ArtworkResponseDTO::from(&created))
    }

    pub async fn update(&self, id: &str, request: ArtworkRequestDTO) -> AppResult<ArtworkResponseDTO> {
        request.check()?;
        self.ensure_exhibitions_exist(&request.exhibition_ids).await?;

        let updated = self
            .artwork_repo
            .update_with(id, |artwork| {
                if artwork.title != request.title {
                    artwork.slug = base_slug(&request.title);
                    artwork.title = request.title.clone();
                }
                apply_request(artwork, &request);
                artwork.touch();
            })
            .await?;
        self.artwork_repo.set_exhibitions(&updated.id, &request.exhibition_ids).await?;

        info!("🖼️ 작품 수정: id={}", updated.id);
        Ok(ArtworkResponseDTO::from(&updated))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.artwork_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("작품을 찾을 수 없습니다: {}", id)));
        }

        info!("🗑️ 작품 삭제: id={}", id);
        Ok(())
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.artwork_repo.count().await
    }

    async fn ensure_exhibitions_exist(&self, exhibition_ids: &[String]) -> AppResult<()> {
        let found = self.exhibition_repo.find_by_ids(exhibition_ids).await?;

        if let Some(missing) = exhibition_ids.iter().find(|id| !found.iter().any(|e| &e.id == *id)) {
            warn!("존재하지 않는 전시 연결 요청: {}", missing);
            return Err(AppError::field("exhibitionIds", format!("존재하지 않는 전시입니다: {}", missing)));
        }

        Ok(())
    }
}

/// 제목에서 슬러그 기준값을 만듭니다. 중복 접미사는 저장 시 리포지토리가 붙입니다.
fn base_slug(title: &str) -> String {
    match slugify(title) {
        slug if slug.is_empty() => FALLBACK_SLUG.to_string(),
        slug => slug,
    }
}

/// 요청 값을 작품에 반영합니다. (제목/슬러그 제외)
fn apply_request(artwork: &mut Artwork, request: &ArtworkRequestDTO) {
    artwork.user_id = Some(request.artist_id.clone());
    artwork.artist_name = request.artist_name.clone();
    artwork.artist_affiliation = request.department.clone();
    artwork.medium = request.medium.clone();
    artwork.size = request.size.clone();
    artwork.year = request.year;
    artwork.description = request.description.clone();
    artwork.image_url = request.image_url.clone();
    artwork.is_featured = request.is_featured;
}
