//! 전시 관련 응답 DTO

use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::dto::common::{PagedListDTO, SimpleProjection, SimpleVariant};
use crate::domain::dto::Dto;
use crate::domain::entities::exhibitions::exhibition::{Exhibition, ExhibitionType};

/// 전시 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionResponseDTO {
    pub id: String,
    pub code: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub exhibition_type: ExhibitionType,
}

impl Dto for ExhibitionResponseDTO {}

impl From<&Exhibition> for ExhibitionResponseDTO {
    fn from(exhibition: &Exhibition) -> Self {
        Self {
            id: exhibition.id.clone(),
            code: exhibition.code.clone(),
            title: exhibition.title.clone(),
            subtitle: exhibition.subtitle.clone(),
            description: exhibition.description.clone(),
            start_date: exhibition.start_date,
            end_date: exhibition.end_date,
            image: exhibition.image.clone(),
            exhibition_type: exhibition.exhibition_type,
        }
    }
}

/// 변형별 추가 필드
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExhibitionVariantFields {
    #[serde(rename_all = "camelCase")]
    Card {
        #[serde(rename = "type")]
        kind: &'static str,
        exhibition_type: ExhibitionType,
    },
    #[serde(rename_all = "camelCase")]
    Modal {
        #[serde(rename = "type")]
        kind: &'static str,
        exhibition_type: ExhibitionType,
        code: String,
        description: String,
    },
}

/// 전시 Simple DTO
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionSimpleDTO {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub variant_fields: Option<ExhibitionVariantFields>,
}

impl Dto for ExhibitionSimpleDTO {}

impl ExhibitionSimpleDTO {
    const KIND: &'static str = "exhibition";

    pub fn new(exhibition: &Exhibition, variant: SimpleVariant) -> Self {
        let variant_fields = match variant {
            SimpleVariant::Default => None,
            SimpleVariant::Card => Some(ExhibitionVariantFields::Card {
                kind: Self::KIND,
                exhibition_type: exhibition.exhibition_type,
            }),
            SimpleVariant::Modal => Some(ExhibitionVariantFields::Modal {
                kind: Self::KIND,
                exhibition_type: exhibition.exhibition_type,
                code: exhibition.code.clone(),
                description: exhibition.description.clone(),
            }),
        };

        Self {
            id: exhibition.id.clone(),
            title: exhibition.title.clone(),
            subtitle: exhibition.subtitle.clone(),
            image: exhibition.image.clone(),
            start_date: exhibition.start_date,
            end_date: exhibition.end_date,
            variant_fields,
        }
    }
}

impl SimpleProjection<Exhibition> for ExhibitionSimpleDTO {
    fn project(entity: &Exhibition, variant: SimpleVariant) -> Self {
        Self::new(entity, variant)
    }
}

/// 페이지 정보 없이 배열로 직렬화되는 전시 목록
///
/// 빈 입력은 `[]`로 직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExhibitionSimpleListDTO(pub Vec<ExhibitionSimpleDTO>);

impl Dto for ExhibitionSimpleListDTO {}

impl ExhibitionSimpleListDTO {
    pub fn new(exhibitions: &[Exhibition], variant: SimpleVariant) -> Self {
        Self(
            exhibitions
                .iter()
                .map(|exhibition| ExhibitionSimpleDTO::new(exhibition, variant))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 전시 목록 DTO
pub type ExhibitionListDTO = PagedListDTO<ExhibitionSimpleDTO>;
