//! Notice Entity Implementation

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 공지 게시 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    #[default]
    Active,
    Inactive,
}

impl NoticeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeStatus::Active => "active",
            NoticeStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(NoticeStatus::Active),
            "inactive" => Ok(NoticeStatus::Inactive),
            other => Err(AppError::field(
                "status",
                format!("상태는 active 또는 inactive 여야 합니다: {}", other),
            )),
        }
    }
}

/// 공지사항 엔티티
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    /// 작성자 사용자 ID
    pub author: String,
    /// 작성자 표시 이름
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 상단 고정 여부
    pub is_important: bool,
    /// 조회수
    pub views: u64,
    pub status: NoticeStatus,
}

impl Notice {
    pub fn new(title: String, content: String, author: String, author_name: String) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            content,
            author,
            author_name,
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    pub fn is_public(&self) -> bool {
        self.status == NoticeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_defaults() {
        let notice = Notice::new("전시 안내".to_string(), "본문".to_string(), "U1".to_string(), "Kim".to_string());

        assert_eq!(notice.views, 0);
        assert!(!notice.is_important);
        assert!(notice.is_public());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("inactive".parse::<NoticeStatus>().unwrap(), NoticeStatus::Inactive);
        assert!("archived".parse::<NoticeStatus>().unwrap_err().is_field_error("status"));
    }

    #[test]
    fn test_zero_views_survive_deserialization() {
        let notice: Notice = serde_json::from_str(r#"{"id":"N1","views":0,"isImportant":false}"#).unwrap();

        assert_eq!(notice.views, 0);
        assert_eq!(notice.status, NoticeStatus::Active);
    }
}
