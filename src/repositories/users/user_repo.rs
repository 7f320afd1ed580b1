//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **자동 의존성 주입**: `register_component!`로 레지스트리에 등록
//! - **이메일 유일성**: 이메일 비교는 대소문자를 구분하지 않음

use std::sync::Arc;
use log::debug;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    db::DataStore,
    domain::dto::common::{Page, PaginationOptions},
    domain::entities::User,
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = locator.get::<UserRepository>()?;
///
/// // 같은 이메일이 이미 있으면 ConflictError
/// let created = repo.create(user).await?;
/// let found = repo.find_by_id(&created.id).await?;
/// ```
pub struct UserRepository {
    store: Arc<DataStore>,
}

register_component!(Repository, "user_repository", UserRepository, UserRepository::from_locator);

impl UserRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self::new(locator.get::<DataStore>()?))
    }

    /// 사용자 목록 페이지 (가입일 내림차순)
    pub async fn find_page(&self, options: &PaginationOptions) -> AppResult<Page<User>> {
        let mut all = self.store.users.read(|rows| rows.to_vec());
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!("사용자 목록 조회: page={}, total={}", options.page, all.len());

        Ok(Page::slice(all, options))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.store.users.read(|rows| rows.iter().find(|u| u.id == id).cloned()))
    }

    /// 사용자를 저장합니다.
    ///
    /// 이메일 중복 확인과 삽입을 같은 쓰기 락 안에서 수행하며,
    /// 대소문자만 다른 이메일이 있어도 `ConflictError`입니다.
    pub async fn create(&self, user: User) -> AppResult<User> {
        self.store.users.write(|rows| -> AppResult<()> {
            if rows.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
                return Err(AppError::ConflictError(format!("이미 사용 중인 이메일입니다: {}", user.email)));
            }
            rows.push(user.clone());
            Ok(())
        })?;

        Ok(user)
    }

    /// 저장된 사용자에 `apply`를 적용하고 갱신된 값을 반환합니다.
    pub async fn update_with(&self, id: &str, apply: impl FnOnce(&mut User)) -> AppResult<User> {
        let updated = self.store.users.write(|rows| {
            rows.iter_mut().find(|u| u.id == id).map(|user| {
                apply(user);
                user.clone()
            })
        });

        updated.ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.store.users.len() as u64)
    }
}
