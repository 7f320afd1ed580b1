//! # 사용자 관리 서비스 구현
//!
//! 관리자 화면의 사용자 등록, 목록, 활성화 상태 변경과
//! 공개 프로필 조회를 담당합니다.
//!
//! ## 주요 규칙
//!
//! - **이메일 중복 방지**: 대소문자 구분 없이 같은 이메일이 있으면 `ConflictError`
//! - **비활성 계정**: 공개 프로필에서는 찾을 수 없는 사용자로 취급

use std::sync::Arc;
use log::{info, warn};
use crate::{
    config::{AppConfig, PaginationConfig},
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::{ListQuery, PaginationOptions},
    domain::dto::users::{UserActiveRequestDTO, UserListDTO, UserRequestDTO, UserResponseDTO},
    domain::dto::RequestDto,
    domain::entities::User,
    repositories::users::UserRepository,
    utils::string_utils::validate_required_string,
};

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
    pagination: PaginationConfig,
}

register_component!(Service, "user_service", UserService, UserService::from_locator);

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, pagination: PaginationConfig) -> Self {
        Self { user_repo, pagination }
    }

    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        let config = locator.get::<AppConfig>()?;
        Ok(Self::new(locator.get::<UserRepository>()?, config.pagination.clone()))
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<UserListDTO> {
        let options = PaginationOptions::from_list_query(query, &self.pagination)?;
        let variant = query.variant()?;

        let page = self.user_repo.find_page(&options).await?;
        Ok(UserListDTO::from_page(&page, variant))
    }

    /// 공개 프로필용 조회. 비활성 계정은 `NotFound`입니다.
    pub async fn get_active(&self, id: &str) -> AppResult<UserResponseDTO> {
        let user = self.find(id).await?;

        if !user.is_active {
            return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user.id)));
        }

        Ok(UserResponseDTO::from(&user))
    }

    /// 사용자 등록
    ///
    /// 1. 요청 검증
    /// 2. 엔티티 생성
    /// 3. 저장 (이메일 중복 확인은 저장과 같은 락 안에서)
    pub async fn create(&self, request: UserRequestDTO) -> AppResult<UserResponseDTO> {
        let start_time = std::time::Instant::now();
        request.check()?;

        let mut user = User::new(
            request.email.clone(),
            request.name.clone(),
            request.department.clone(),
            request.role(),
        );
        user.profile_image = request.profile_image.clone();

        let created = self.user_repo.create(user).await.map_err(|e| {
            if matches!(e, AppError::ConflictError(_)) {
                warn!("중복 이메일 등록 시도: {}", request.email);
            }
            e
        })?;
        info!("👤 사용자 등록: id={}, role={} ({:?})", created.id, created.role, start_time.elapsed());

        Ok(UserResponseDTO::from(&created))
    }

    /// 계정 활성화 상태 변경
    pub async fn set_active(&self, id: &str, request: UserActiveRequestDTO) -> AppResult<UserResponseDTO> {
        request.check()?;
        let active = request.is_active.unwrap_or(true);

        let id = validate_required_string(id, "id")?;
        let updated = self.user_repo.update_with(&id, |user| user.set_active(active)).await?;
        info!("👤 사용자 활성화 상태 변경: id={}, active={}", updated.id, updated.is_active);

        Ok(UserResponseDTO::from(&updated))
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.user_repo.count().await
    }

    async fn find(&self, id: &str) -> AppResult<User> {
        let id = validate_required_string(id, "id")?;

        self.user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DataStore;
    use serde_json::json;

    fn service() -> UserService {
        UserService::new(
            Arc::new(UserRepository::new(Arc::new(DataStore::new()))),
            PaginationConfig::default(),
        )
    }

    fn request(email: &str) -> UserRequestDTO {
        UserRequestDTO::from_value(json!({
            "email": email,
            "name": "Kim",
            "department": "Art",
            "role": "admin"
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let service = service();
        service.create(request("kim@example.ac.kr")).await.unwrap();

        let result = service.create(request("KIM@example.ac.kr")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_deactivated_user_is_hidden() {
        let service = service();
        let created = service.create(request("kim@example.ac.kr")).await.unwrap();

        let updated = service
            .set_active(&created.id, UserActiveRequestDTO { is_active: Some(false) })
            .await
            .unwrap();

        assert!(!updated.is_active);
        assert!(matches!(service.get_active(&created.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_set_active_requires_flag() {
        let service = service();
        let created = service.create(request("kim@example.ac.kr")).await.unwrap();

        let err = service.set_active(&created.id, UserActiveRequestDTO::default()).await.unwrap_err();
        assert!(err.is_field_error("isActive"));
    }

    #[actix_web::test]
    async fn test_list_uses_variant() {
        let service = service();
        service.create(request("kim@example.ac.kr")).await.unwrap();

        let query = ListQuery { view: Some("modal".to_string()), ..Default::default() };
        let json = serde_json::to_value(service.list(&query).await.unwrap()).unwrap();

        assert_eq!(json["items"][0]["type"], "user");
        assert_eq!(json["items"][0]["role"], "admin");
    }
}
