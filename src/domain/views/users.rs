//! 사용자 프로필 페이지 View DTO

use serde::Serialize;
use crate::domain::dto::artworks::ArtworkSimpleDTO;
use crate::domain::dto::users::UserResponseDTO;
use super::ViewDto;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileViewDTO {
    pub title: String,
    pub user: UserResponseDTO,
    /// 사용자가 등록한 작품
    pub artworks: Vec<ArtworkSimpleDTO>,
}

impl Default for UserProfileViewDTO {
    fn default() -> Self {
        Self {
            title: "프로필".to_string(),
            user: UserResponseDTO::default(),
            artworks: Vec::new(),
        }
    }
}

impl UserProfileViewDTO {
    pub fn new(user: UserResponseDTO, artworks: Vec<ArtworkSimpleDTO>) -> Self {
        Self {
            title: format!("{} 프로필", user.name),
            user,
            artworks,
        }
    }
}

impl ViewDto for UserProfileViewDTO {
    const TEMPLATE: &'static str = "user/profile";
}
