//! # 공지 관리 서비스 구현
//!
//! - 공개 목록/상세에는 `active` 공지만 노출되며 중요 공지가 먼저 옵니다.
//! - 공개 상세 조회 시 조회수가 1 증가합니다.
//! - 관리자 목록은 상태와 관계없이 모든 공지를 보여줍니다.

use std::sync::Arc;
use log::{debug, info};
use crate::{
    config::{AppConfig, PaginationConfig},
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::{ListQuery, PaginationOptions},
    domain::dto::notices::{NoticeListDTO, NoticeRequestDTO, NoticeResponseDTO, NoticeSimpleDTO},
    domain::dto::RequestDto,
    domain::entities::Notice,
    repositories::notices::NoticeRepository,
    utils::string_utils::validate_required_string,
};

pub struct NoticeService {
    notice_repo: Arc<NoticeRepository>,
    pagination: PaginationConfig,
}

register_component!(Service, "notice_service", NoticeService, NoticeService::from_locator);

impl NoticeService {
    pub fn new(notice_repo: Arc<NoticeRepository>, pagination: PaginationConfig) -> Self {
        Self { notice_repo, pagination }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        let config = locator.get::<AppConfig>()?;
        Ok(Self::new(locator.get::<NoticeRepository>()?, config.pagination.clone()))
    }

    /// 공개 공지 목록
    pub async fn public_list(&self, query: &ListQuery) -> AppResult<NoticeListDTO> {
        let options = PaginationOptions::from_list_query(query, &self.pagination)?;
        let page = self.notice_repo.find_public_page(&options).await?;

        Ok(NoticeListDTO::from_page(&page, query.variant()?))
    }

    /// 관리자용 전체 공지 목록
    pub async fn admin_list(&self, query: &ListQuery) -> AppResult<NoticeListDTO> {
        let options = PaginationOptions::from_list_query(query, &self.pagination)?;
        let page = self.notice_repo.find_page(&options).await?;

        Ok(NoticeListDTO::from_page(&page, query.variant()?))
    }

    pub async fn recent(&self, limit: usize) -> AppResult<Vec<NoticeSimpleDTO>> {
        let notices = self.notice_repo.find_recent_public(limit).await?;
        Ok(notices.iter().map(NoticeSimpleDTO::from).collect())
    }

    /// 공개 공지 상세. 조회수를 올린 뒤의 값을 돌려줍니다.
    pub async fn read(&self, id: &str) -> AppResult<NoticeResponseDTO> {
        let id = validate_required_string(id, "id")?;
        let not_found = || AppError::NotFound(format!("공지를 찾을 수 없습니다: {}", id));

        let notice = self.notice_repo.find_by_id(&id).await?.ok_or_else(not_found)?;
        if !notice.is_public() {
            return Err(not_found());
        }

        let notice = self.notice_repo.increment_views(&id).await?.ok_or_else(not_found)?;
        debug!("공지 조회: id={}, views={}", notice.id, notice.views);

        Ok(NoticeResponseDTO::from(&notice))
    }

    pub async fn create(&self, request: NoticeRequestDTO) -> AppResult<NoticeResponseDTO> {
        request.check()?;

        let mut notice = Notice::new(
            request.title.clone(),
            request.content.clone(),
            request.author.clone(),
            request.author_name.clone(),
        );
        notice.is_important = request.is_important;
        notice.status = request.status();

        let created = self.notice_repo.create(notice).await?;
        info!("📢 공지 등록: id={}, important={}", created.id, created.is_important);

        Ok(NoticeResponseDTO::from(&created))
    }

    pub async fn update(&self, id: &str, request: NoticeRequestDTO) -> AppResult<NoticeResponseDTO> {
        request.check()?;

        let updated = self
            .notice_repo
            .update_with(id, |notice| {
                notice.title = request.title.clone();
                notice.content = request.content.clone();
                notice.author = request.author.clone();
                notice.author_name = request.author_name.clone();
                notice.is_important = request.is_important;
                notice.status = request.status();
                notice.updated_at = chrono::Utc::now();
            })
            .await?;
        info!("📢 공지 수정: id={}", updated.id);

        Ok(NoticeResponseDTO::from(&updated))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.notice_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("공지를 찾을 수 없습니다: {}", id)));
        }

        info!("🗑️ 공지 삭제: id={}", id);
        Ok(())
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.notice_repo.count().await
    }
}
