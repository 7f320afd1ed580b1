//! # 공지 리포지토리 구현

use std::sync::Arc;
use log::debug;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    db::DataStore,
    domain::dto::common::{Page, PaginationOptions},
    domain::entities::Notice,
};

/// 공지 데이터 액세스 리포지토리
///
/// 목록 정렬: 중요 공지 먼저, 그 안에서 작성일 내림차순
pub struct NoticeRepository {
    store: Arc<DataStore>,
}

register_component!(Repository, "notice_repository", NoticeRepository, NoticeRepository::from_locator);

impl NoticeRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self::new(locator.get::<DataStore>()?))
    }

    fn sorted(rows: &[Notice], public_only: bool) -> Vec<Notice> {
        let mut notices: Vec<Notice> = rows
            .iter()
            .filter(|n| !public_only || n.is_public())
            .cloned()
            .collect();
        notices.sort_by(|a, b| {
            b.is_important
                .cmp(&a.is_important)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        notices
    }

    /// 공개(`active`) 공지 페이지
    pub async fn find_public_page(&self, options: &PaginationOptions) -> AppResult<Page<Notice>> {
        let all = self.store.notices.read(|rows| Self::sorted(rows, true));
        debug!("공개 공지 조회: page={}, total={}", options.page, all.len());

        Ok(Page::slice(all, options))
    }

    /// 상태와 관계없이 모든 공지 페이지 (관리자용)
    pub async fn find_page(&self, options: &PaginationOptions) -> AppResult<Page<Notice>> {
        let all = self.store.notices.read(|rows| Self::sorted(rows, false));
        Ok(Page::slice(all, options))
    }

    pub async fn find_recent_public(&self, limit: usize) -> AppResult<Vec<Notice>> {
        Ok(self.store.notices.read(|rows| Self::sorted(rows, true).into_iter().take(limit).collect()))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Notice>> {
        Ok(self.store.notices.read(|rows| rows.iter().find(|n| n.id == id).cloned()))
    }

    /// 조회수를 1 올리고 갱신된 공지를 반환합니다.
    pub async fn increment_views(&self, id: &str) -> AppResult<Option<Notice>> {
        Ok(self.store.notices.write(|rows| {
            rows.iter_mut().find(|n| n.id == id).map(|notice| {
                notice.views = notice.views.saturating_add(1);
                notice.clone()
            })
        }))
    }

    pub async fn create(&self, notice: Notice) -> AppResult<Notice> {
        self.store.notices.write(|rows| rows.push(notice.clone()));
        Ok(notice)
    }

    /// 저장된 공지에 `apply`를 적용합니다.
    ///
    /// 쓰기 락 안에서 행을 직접 고치므로 그 사이의 조회수 증가가 덮어써지지 않습니다.
    pub async fn update_with(&self, id: &str, apply: impl FnOnce(&mut Notice)) -> AppResult<Notice> {
        let updated = self.store.notices.write(|rows| {
            rows.iter_mut().find(|n| n.id == id).map(|notice| {
                apply(notice);
                notice.clone()
            })
        });

        updated.ok_or_else(|| AppError::NotFound(format!("공지를 찾을 수 없습니다: {}", id)))
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.notices.write(|rows| {
            let before = rows.len();
            rows.retain(|n| n.id != id);
            rows.len() != before
        }))
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.store.notices.len() as u64)
    }
}
