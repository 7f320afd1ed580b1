//! 사용자 관련 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::dto::common::{PagedListDTO, SimpleProjection, SimpleVariant};
use crate::domain::dto::Dto;
use crate::domain::entities::users::user::{User, UserRole};

/// 사용자 응답 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDTO {
    pub id: String,
    pub email: String,
    pub name: String,
    pub department: String,
    pub role: UserRole,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dto for UserResponseDTO {}

impl From<&User> for UserResponseDTO {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            department: user.department.clone(),
            role: user.role,
            profile_image: user.profile_image.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 변형별 추가 필드
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserVariantFields {
    Card {
        #[serde(rename = "type")]
        kind: &'static str,
    },
    Modal {
        #[serde(rename = "type")]
        kind: &'static str,
        email: String,
        role: UserRole,
    },
}

/// 사용자 Simple DTO
///
/// ```json
/// // card
/// { "id": "U1", "name": "Kim", "department": "Art", "profileImage": null, "type": "user" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSimpleDTO {
    pub id: String,
    pub name: String,
    pub department: String,
    pub profile_image: Option<String>,
    #[serde(flatten)]
    pub variant_fields: Option<UserVariantFields>,
}

impl Dto for UserSimpleDTO {}

impl UserSimpleDTO {
    const KIND: &'static str = "user";

    pub fn new(user: &User, variant: SimpleVariant) -> Self {
        let variant_fields = match variant {
            SimpleVariant::Default => None,
            SimpleVariant::Card => Some(UserVariantFields::Card { kind: Self::KIND }),
            SimpleVariant::Modal => Some(UserVariantFields::Modal {
                kind: Self::KIND,
                email: user.email.clone(),
                role: user.role,
            }),
        };

        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            department: user.department.clone(),
            profile_image: user.profile_image.clone(),
            variant_fields,
        }
    }
}

impl SimpleProjection<User> for UserSimpleDTO {
    fn project(entity: &User, variant: SimpleVariant) -> Self {
        Self::new(entity, variant)
    }
}

/// 사용자 목록 DTO
pub type UserListDTO = PagedListDTO<UserSimpleDTO>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::common::{Page, PaginationOptions};
    use crate::config::PaginationConfig;
    use serde_json::json;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.ac.kr", id.to_lowercase()),
            name: name.to_string(),
            department: "Art".to_string(),
            role: UserRole::Member,
            profile_image: None,
            is_active: true,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }

    #[test]
    fn test_card_variant_scenario() {
        let dto = UserSimpleDTO::new(&user("U1", "Kim"), SimpleVariant::Card);

        assert_eq!(
            dto.to_json(),
            json!({"id": "U1", "name": "Kim", "department": "Art", "profileImage": null, "type": "user"})
        );
    }

    #[test]
    fn test_default_variant_has_base_fields_only() {
        let dto = UserSimpleDTO::new(&user("U1", "Kim"), SimpleVariant::Default);

        assert_eq!(
            dto.to_json(),
            json!({"id": "U1", "name": "Kim", "department": "Art", "profileImage": null})
        );
    }

    #[test]
    fn test_modal_variant_adds_contact_fields() {
        let dto = UserSimpleDTO::new(&user("U1", "Kim"), SimpleVariant::Modal);
        let json = dto.to_json();

        assert_eq!(json["type"], "user");
        assert_eq!(json["email"], "u1@example.ac.kr");
        assert_eq!(json["role"], "member");
    }

    #[test]
    fn test_response_dto_fields() {
        let json = UserResponseDTO::from(&user("U1", "Kim")).to_json();

        assert_eq!(json["isActive"], true);
        assert_eq!(json["profileImage"], serde_json::Value::Null);
        assert_eq!(json["role"], "member");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_list_preserves_order_and_count() {
        let users = vec![user("U1", "Kim"), user("U2", "Lee"), user("U3", "Park")];
        let options = PaginationOptions::first_page(&PaginationConfig::default());
        let page = Page::slice(users.clone(), &options);

        let list = UserListDTO::from_page(&page, SimpleVariant::Card);

        assert_eq!(list.items.len(), 3);
        for (item, source) in list.items.iter().zip(users.iter()) {
            assert_eq!(item, &UserSimpleDTO::new(source, SimpleVariant::Card));
        }
        assert_eq!(list.to_json()["totalPages"], 1);
    }

    #[test]
    fn test_serialization_is_stable() {
        let dto = UserSimpleDTO::new(&user("U1", "Kim"), SimpleVariant::Modal);

        let first = serde_json::to_string(&dto).unwrap();
        let second = serde_json::to_string(&dto).unwrap();
        assert_eq!(first, second);
    }
}
