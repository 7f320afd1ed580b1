//! 공지 관련 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::dto::common::{PagedListDTO, SimpleProjection, SimpleVariant};
use crate::domain::dto::Dto;
use crate::domain::entities::notices::notice::{Notice, NoticeStatus};

/// 공지 응답 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponseDTO {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_important: bool,
    pub views: u64,
    pub status: NoticeStatus,
}

impl Dto for NoticeResponseDTO {}

impl From<&Notice> for NoticeResponseDTO {
    fn from(notice: &Notice) -> Self {
        Self {
            id: notice.id.clone(),
            title: notice.title.clone(),
            content: notice.content.clone(),
            author: notice.author.clone(),
            author_name: notice.author_name.clone(),
            created_at: notice.created_at,
            updated_at: notice.updated_at,
            is_important: notice.is_important,
            views: notice.views,
            status: notice.status,
        }
    }
}

/// 공지 Simple DTO
///
/// 공지 목록은 변형 없이 항상 같은 모양입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSimpleDTO {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub is_important: bool,
    pub views: u64,
}

impl Dto for NoticeSimpleDTO {}

impl From<&Notice> for NoticeSimpleDTO {
    fn from(notice: &Notice) -> Self {
        Self {
            id: notice.id.clone(),
            title: notice.title.clone(),
            author_name: notice.author_name.clone(),
            created_at: notice.created_at,
            is_important: notice.is_important,
            views: notice.views,
        }
    }
}

impl SimpleProjection<Notice> for NoticeSimpleDTO {
    fn project(entity: &Notice, _variant: SimpleVariant) -> Self {
        Self::from(entity)
    }
}

/// 공지 목록 DTO
pub type NoticeListDTO = PagedListDTO<NoticeSimpleDTO>;
