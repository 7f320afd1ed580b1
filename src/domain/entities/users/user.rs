//! User Entity Implementation
//!
//! 갤러리 사용자(학생, 교직원, 외부 작가) 엔티티입니다.
//! 역할(`role`)은 권한 판단에 쓰이지만 권한 검사 자체는 이 백엔드 범위 밖입니다.

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 사용자 역할
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 관리자
    Admin,
    /// 학내 구성원 (기본값)
    #[default]
    Member,
    /// 외부 작가
    External,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
            UserRole::External => "external",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(UserRole::Admin),
            "member" => Ok(UserRole::Member),
            "external" => Ok(UserRole::External),
            other => Err(AppError::field("role", format!("지원하지 않는 역할입니다: {}", other))),
        }
    }
}

fn default_active() -> bool {
    true
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    pub name: String,
    /// 소속 학과
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub role: UserRole,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub profile_image: Option<String>,
    /// 계정 활성화 여부
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, department: String, role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name,
            department,
            role,
            profile_image: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active_member() {
        let user = User::new(
            "kim@example.ac.kr".to_string(),
            "Kim".to_string(),
            "Art".to_string(),
            UserRole::default(),
        );

        assert!(user.is_active);
        assert_eq!(user.role, UserRole::Member);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_seed_defaults() {
        let user: User = serde_json::from_str(r#"{"id":"U1","email":"a@b.c","name":"Kim"}"#).unwrap();

        assert!(user.is_active);
        assert_eq!(user.role, UserRole::Member);
        assert_eq!(user.profile_image, None);
        assert_eq!(user.department, "");
    }

    #[test]
    fn test_explicit_false_is_kept() {
        let user: User =
            serde_json::from_str(r#"{"id":"U1","email":"a@b.c","name":"Kim","isActive":false}"#).unwrap();

        assert!(!user.is_active);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("root".parse::<UserRole>().unwrap_err().is_field_error("role"));
        assert_eq!(UserRole::External.to_string(), "external");
    }
}
