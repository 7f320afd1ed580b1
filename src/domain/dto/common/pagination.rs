//! 페이지네이션 DTO
//!
//! - [`PaginationOptions`]: 요청 쿼리에서 해석한 페이지/크기 (항상 유효 범위로 보정됨)
//! - [`Page`]: 리포지토리가 돌려주는 한 페이지 분량의 엔티티
//! - [`PaginationInfo`]: 화면 렌더링용 페이지 정보 (`currentPage`, `totalPages`, `total`)
//! - [`PagedListDTO`]: `{items, total, page, totalPages}` 형태의 JSON 목록 응답

use serde::{Deserialize, Serialize};
use crate::config::PaginationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::Dto;
use super::variant::SimpleVariant;

/// 목록 조회 쿼리 파라미터
///
/// 숫자 해석은 [`PaginationOptions::from_query`]에서 하므로 원문 문자열로 받습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Simple DTO 변형 (`card`, `modal`, `default`)
    pub view: Option<String>,
}

impl ListQuery {
    pub fn variant(&self) -> AppResult<SimpleVariant> {
        SimpleVariant::parse_optional(self.view.as_deref())
    }
}

/// 보정된 페이지네이션 옵션
///
/// - `page`는 1 이상
/// - `limit`은 1 이상, 설정된 최대값 이하
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub page: u32,
    pub limit: u32,
}

impl PaginationOptions {
    /// 숫자 값을 유효 범위로 보정하여 생성합니다.
    pub fn new(page: i64, limit: i64, config: &PaginationConfig) -> Self {
        let page = page.clamp(1, u32::MAX as i64) as u32;
        let limit = limit.clamp(1, config.max_limit.max(1) as i64) as u32;

        Self { page, limit }
    }

    /// 설정의 기본 페이지 크기로 첫 페이지를 만듭니다.
    pub fn first_page(config: &PaginationConfig) -> Self {
        Self::new(1, config.default_limit as i64, config)
    }

    /// 쿼리 문자열 값에서 옵션을 만듭니다.
    ///
    /// - `page`가 없거나 숫자가 아니면 1페이지
    /// - `limit`이 없으면 설정의 기본값
    /// - `limit`이 숫자가 아니면 `limit` 필드 검증 에러
    pub fn from_query(page: Option<&str>, limit: Option<&str>, config: &PaginationConfig) -> AppResult<Self> {
        let page = page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);

        let limit = match limit.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::field("limit", format!("숫자여야 합니다: {}", raw)))?,
            None => config.default_limit as i64,
        };

        Ok(Self::new(page, limit, config))
    }

    pub fn from_list_query(query: &ListQuery, config: &PaginationConfig) -> AppResult<Self> {
        Self::from_query(query.page.as_deref(), query.limit.as_deref(), config)
    }

    /// 건너뛸 레코드 수
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }
}

/// 리포지토리 페이지 조회 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    /// 전체 목록에서 요청한 페이지만 잘라냅니다.
    pub fn slice(all: Vec<T>, options: &PaginationOptions) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(options.offset())
            .take(options.limit as usize)
            .collect();

        Self { items, total, page: options.page, limit: options.limit }
    }

    /// 전체 페이지 수. 결과가 없어도 1페이지로 봅니다.
    pub fn total_pages(&self) -> u32 {
        let limit = self.limit.max(1) as u64;
        self.total.div_ceil(limit).max(1) as u32
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// 화면 렌더링용 페이지 정보
///
/// 값이 주어지지 않은 경우 `{currentPage: 1, totalPages: 1, total: 0}`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self { current_page: 1, total_pages: 1, total: 0 }
    }
}

impl<T> From<&Page<T>> for PaginationInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            current_page: page.page,
            total_pages: page.total_pages(),
            total: page.total,
        }
    }
}

/// 엔티티를 Simple DTO로 투영하는 규칙
pub trait SimpleProjection<E> {
    fn project(entity: &E, variant: SimpleVariant) -> Self;
}

/// 페이지네이션 메타데이터가 포함된 목록 DTO
///
/// ```json
/// { "items": [...], "total": 42, "page": 2, "totalPages": 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedListDTO<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> PagedListDTO<T> {
    /// 페이지의 각 엔티티를 입력 순서대로 Simple DTO로 감쌉니다.
    pub fn from_page<E>(page: &Page<E>, variant: SimpleVariant) -> Self
    where
        T: SimpleProjection<E>,
    {
        Self {
            items: page.items.iter().map(|entity| T::project(entity, variant)).collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages(),
        }
    }

    pub fn pagination(&self) -> PaginationInfo {
        PaginationInfo {
            current_page: self.page,
            total_pages: self.total_pages,
            total: self.total,
        }
    }
}

impl<T: Serialize> Dto for PagedListDTO<T> {}

impl<T> Default for PagedListDTO<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, page: 1, total_pages: 1 }
    }
}
