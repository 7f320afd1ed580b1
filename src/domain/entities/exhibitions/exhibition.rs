//! Exhibition Entity Implementation

use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 전시 유형
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionType {
    /// 정기 전시
    #[default]
    Regular,
    /// 기타 (특별전, 초대전 등)
    Other,
}

impl ExhibitionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitionType::Regular => "regular",
            ExhibitionType::Other => "other",
        }
    }
}

impl fmt::Display for ExhibitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExhibitionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "regular" => Ok(ExhibitionType::Regular),
            "other" => Ok(ExhibitionType::Other),
            other => Err(AppError::field(
                "exhibitionType",
                format!("지원하지 않는 전시 유형입니다: {}", other),
            )),
        }
    }
}

/// 전시 엔티티
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exhibition {
    pub id: String,
    /// 전시 코드 (예: "2024-GRAD"), 저장소 내에서 유일
    pub code: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// 포스터 이미지 URL
    pub image: Option<String>,
    pub exhibition_type: ExhibitionType,
}

impl Exhibition {
    pub fn new(code: String, title: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            code,
            title,
            ..Default::default()
        }
    }

    /// 주어진 날짜에 전시가 진행 중인지 확인합니다.
    ///
    /// 시작일/종료일이 없으면 그쪽으로는 열려 있는 것으로 봅니다.
    pub fn is_ongoing_on(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| start <= date) && self.end_date.is_none_or(|end| date <= end)
    }
}
