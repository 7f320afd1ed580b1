//! # 전시 리포지토리 구현

use std::cmp::Ordering;
use std::sync::Arc;
use chrono::NaiveDate;
use log::debug;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    db::DataStore,
    domain::dto::common::{Page, PaginationOptions},
    domain::entities::Exhibition,
    utils::string_utils::first_available,
};

/// 전시 데이터 액세스 리포지토리
///
/// 목록은 시작일 내림차순(최근 전시 먼저)이며, 시작일이 없는 전시는 마지막에 옵니다.
pub struct ExhibitionRepository {
    store: Arc<DataStore>,
}

register_component!(Repository, "exhibition_repository", ExhibitionRepository, ExhibitionRepository::from_locator);

fn by_start_date_desc(a: &Exhibition, b: &Exhibition) -> Ordering {
    match (a.start_date, b.start_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn code_conflict(code: &str) -> AppError {
    AppError::ConflictError(format!("이미 사용 중인 전시 코드입니다: {}", code))
}

impl ExhibitionRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self::new(locator.get::<DataStore>()?))
    }

    fn sorted(rows: &[Exhibition]) -> Vec<Exhibition> {
        let mut exhibitions = rows.to_vec();
        exhibitions.sort_by(by_start_date_desc);
        exhibitions
    }

    pub async fn find_all(&self) -> AppResult<Vec<Exhibition>> {
        Ok(self.store.exhibitions.read(Self::sorted))
    }

    pub async fn find_page(&self, options: &PaginationOptions) -> AppResult<Page<Exhibition>> {
        let all = self.store.exhibitions.read(Self::sorted);
        debug!("전시 목록 조회: page={}, limit={}, total={}", options.page, options.limit, all.len());

        Ok(Page::slice(all, options))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Exhibition>> {
        Ok(self.store.exhibitions.read(|rows| rows.iter().find(|e| e.id == id).cloned()))
    }

    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Exhibition>> {
        Ok(self.store.exhibitions.read(|rows| rows.iter().find(|e| e.code == code).cloned()))
    }

    /// 주어진 ID 목록의 전시를 시작일 내림차순으로 반환합니다. 없는 ID는 건너뜁니다.
    pub async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Exhibition>> {
        let exhibitions = self.store.exhibitions.read(|rows| {
            Self::sorted(rows)
                .into_iter()
                .filter(|e| ids.contains(&e.id))
                .collect()
        });

        Ok(exhibitions)
    }

    /// 주어진 날짜에 진행 중인 전시
    pub async fn find_ongoing(&self, date: NaiveDate) -> AppResult<Vec<Exhibition>> {
        let exhibitions = self.store.exhibitions.read(|rows| {
            Self::sorted(rows)
                .into_iter()
                .filter(|e| e.is_ongoing_on(date))
                .collect()
        });

        Ok(exhibitions)
    }

    /// 지정한 코드로 전시를 저장합니다. 코드가 이미 쓰이고 있으면 `ConflictError`입니다.
    pub async fn create(&self, exhibition: Exhibition) -> AppResult<Exhibition> {
        self.store.exhibitions.write(|rows| -> AppResult<()> {
            if rows.iter().any(|e| e.code == exhibition.code) {
                return Err(code_conflict(&exhibition.code));
            }
            rows.push(exhibition.clone());
            Ok(())
        })?;

        Ok(exhibition)
    }

    /// `exhibition.code`를 기준값으로 삼아 비어 있는 코드를 배정한 뒤 저장합니다.
    pub async fn create_with_generated_code(&self, mut exhibition: Exhibition) -> AppResult<Exhibition> {
        self.store.exhibitions.write(|rows| {
            exhibition.code = first_available(&exhibition.code, |candidate| rows.iter().any(|e| e.code == candidate));
            rows.push(exhibition.clone());
        });

        Ok(exhibition)
    }

    /// 저장된 전시에 `apply`를 적용합니다.
    ///
    /// 바뀐 코드가 다른 전시와 겹치면 `ConflictError`이며 아무것도 저장하지 않습니다.
    pub async fn update_with(&self, id: &str, apply: impl FnOnce(&mut Exhibition)) -> AppResult<Exhibition> {
        self.store.exhibitions.write(|rows| -> AppResult<Exhibition> {
            let index = rows
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| AppError::NotFound(format!("전시를 찾을 수 없습니다: {}", id)))?;

            let mut exhibition = rows[index].clone();
            apply(&mut exhibition);

            if rows.iter().any(|e| e.id != id && e.code == exhibition.code) {
                return Err(code_conflict(&exhibition.code));
            }

            rows[index] = exhibition.clone();
            Ok(exhibition)
        })
    }

    /// 전시와 해당 전시의 작품 연결을 삭제합니다.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.store.exhibitions.write(|rows| {
            let before = rows.len();
            rows.retain(|e| e.id != id);
            rows.len() != before
        });

        if removed {
            self.store.artwork_exhibitions.write(|links| links.retain(|link| link.exhibition_id != id));
        }

        Ok(removed)
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.store.exhibitions.len() as u64)
    }
}
