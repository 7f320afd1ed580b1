//! # 전시 관리 서비스 구현
//!
//! - 목록은 시작일 내림차순
//! - 전시 코드는 유일해야 하며, 중복이면 `ConflictError`
//! - 코드 없이 등록하면 `{시작 연도}-{제목 슬러그}` 형태로 발급 (충돌 시 접미사)

use std::sync::Arc;
use chrono::{Datelike, NaiveDate};
use log::info;
use crate::{
    config::{AppConfig, PaginationConfig},
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::{ListQuery, PaginationOptions, SimpleVariant},
    domain::dto::exhibitions::{
        ExhibitionListDTO, ExhibitionRequestDTO, ExhibitionResponseDTO, ExhibitionSimpleDTO,
        ExhibitionSimpleListDTO,
    },
    domain::dto::RequestDto,
    domain::entities::Exhibition,
    repositories::exhibitions::ExhibitionRepository,
    utils::string_utils::{slugify, validate_required_string},
};

pub struct ExhibitionService {
    exhibition_repo: Arc<ExhibitionRepository>,
    pagination: PaginationConfig,
}

register_component!(Service, "exhibition_service", ExhibitionService, ExhibitionService::from_locator);

impl ExhibitionService {
    pub fn new(exhibition_repo: Arc<ExhibitionRepository>, pagination: PaginationConfig) -> Self {
        Self { exhibition_repo, pagination }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        let config = locator.get::<AppConfig>()?;
        Ok(Self::new(locator.get::<ExhibitionRepository>()?, config.pagination.clone()))
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<ExhibitionListDTO> {
        let options = PaginationOptions::from_list_query(query, &self.pagination)?;
        let variant = query.variant()?;

        let page = self.exhibition_repo.find_page(&options).await?;
        Ok(ExhibitionListDTO::from_page(&page, variant))
    }

    /// 페이지 정보 없는 전체 전시 목록 (작품 등록 화면의 전시 선택용)
    pub async fn all(&self, variant: SimpleVariant) -> AppResult<ExhibitionSimpleListDTO> {
        let exhibitions = self.exhibition_repo.find_all().await?;
        Ok(ExhibitionSimpleListDTO::new(&exhibitions, variant))
    }

    /// 주어진 날짜에 진행 중인 전시
    pub async fn ongoing(&self, date: NaiveDate) -> AppResult<Vec<ExhibitionSimpleDTO>> {
        let exhibitions = self.exhibition_repo.find_ongoing(date).await?;
        Ok(exhibitions.iter().map(|e| ExhibitionSimpleDTO::new(e, SimpleVariant::Card)).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<ExhibitionResponseDTO> {
        let id = validate_required_string(id, "id")?;
        let exhibition = self
            .exhibition_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("전시를 찾을 수 없습니다: {}", id)))?;

        Ok(ExhibitionResponseDTO::from(&exhibition))
    }

    pub async fn create(&self, request: ExhibitionRequestDTO) -> AppResult<ExhibitionResponseDTO> {
        request.check()?;

        let code = request.code.clone().unwrap_or_else(|| base_code(&request));
        let mut exhibition = Exhibition::new(code, request.title.clone());
        apply_request(&mut exhibition, &request);

        let created = match request.code {
            Some(_) => self.exhibition_repo.create(exhibition).await?,
            None => self.exhibition_repo.create_with_generated_code(exhibition).await?,
        };
        info!("🏛️ 전시 등록: id={}, code={}", created.id, created.code);

        Ok(ExhibitionResponseDTO::from(&created))
    }

    pub async fn update(&self, id: &str, request: ExhibitionRequestDTO) -> AppResult<ExhibitionResponseDTO> {
        request.check()?;

        let updated = self
            .exhibition_repo
            .update_with(id, |exhibition| {
                if let Some(code) = &request.code {
                    exhibition.code = code.clone();
                }
                exhibition.title = request.title.clone();
                apply_request(exhibition, &request);
            })
            .await?;
        info!("🏛️ 전시 수정: id={}", updated.id);

        Ok(ExhibitionResponseDTO::from(&updated))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.exhibition_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("전시를 찾을 수 없습니다: {}", id)));
        }

        info!("🗑️ 전시 삭제: id={}", id);
        Ok(())
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.exhibition_repo.count().await
    }
}

/// 코드 없이 등록할 때의 기준 코드 `{시작 연도}-{제목 슬러그}` (대문자)
fn base_code(request: &ExhibitionRequestDTO) -> String {
    let year = request.start_date.map(|d| d.year()).unwrap_or_default();
    let title = match slugify(&request.title) {
        slug if slug.is_empty() => "exhibition".to_string(),
        slug => slug,
    };

    format!("{}-{}", year, title).to_uppercase()
}

/// 요청 값을 전시에 반영합니다. (코드/제목 제외)
fn apply_request(exhibition: &mut Exhibition, request: &ExhibitionRequestDTO) {
    exhibition.subtitle = request.subtitle.clone();
    exhibition.description = request.description.clone();
    exhibition.start_date = request.start_date;
    exhibition.end_date = request.end_date;
    exhibition.image = request.image.clone();
    exhibition.exhibition_type = request.exhibition_type();
}
