//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 모양을 정의합니다.
//!
//! ## 구성
//!
//! | 종류 | 방향 | 역할 |
//! |------|------|------|
//! | Request DTO | 클라이언트 → 서버 | 요청 본문 정규화 + 필수 필드 검증 |
//! | Response DTO | 서버 → 클라이언트 | 엔티티의 허용된 필드만 노출 |
//! | Simple DTO | 서버 → 클라이언트 | 목록/카드/모달용 축약 모양 ([`SimpleVariant`]) |
//! | Detail DTO | 서버 → 클라이언트 | 관련 엔티티 중첩 + 이미지 URL 최적화 |
//! | List DTO | 서버 → 클라이언트 | Simple DTO 목록 + 페이지 정보 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/        # 변형, 페이지네이션, 이미지 최적화 협력자
//! ├── artworks/      # 작품 DTO
//! ├── exhibitions/   # 전시 DTO
//! ├── users/         # 사용자 DTO
//! └── notices/       # 공지 DTO
//! ```
//!
//! ## 규칙
//!
//! - Response 계열 DTO는 실패하지 않습니다. 빠진 선택 필드는 문서화된 기본값
//!   (텍스트 `""`, 선택 이미지/식별자 `null`, 불리언 `false`, 목록 `[]`)이 됩니다.
//! - Request DTO의 유일한 실패는 `AppError::ValidationError`이며, 메시지는 실패한
//!   필드명(camelCase)으로 시작합니다.
//! - DTO는 요청마다 새로 만들어지고 응답 후 버려집니다. 원본 엔티티를 참조하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let request = NoticeRequestDTO::from_value(body)?;
//! request.check()?;
//!
//! let notice = notice_service.create(request).await?;
//! Ok(HttpResponse::Created().json(NoticeResponseDTO::from(&notice)))
//! ```

pub mod common;
pub mod artworks;
pub mod exhibitions;
pub mod users;
pub mod notices;

pub use common::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};

/// 응답 DTO 공통 동작
pub trait Dto: Serialize {
    /// JSON 값으로 직렬화합니다.
    ///
    /// DTO 필드는 모두 문자열 키를 가진 단순 값이므로 직렬화는 실패하지 않습니다.
    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// 요청 DTO 공통 동작
pub trait RequestDto: Validate + DeserializeOwned {
    /// 원본 요청 매핑에서 DTO를 생성합니다. 알 수 없는 필드는 무시됩니다.
    ///
    /// 타입이 맞지 않는 필드는 그 필드 경로를 담은 `ValidationError`가 됩니다.
    fn from_value(value: Value) -> AppResult<Self> {
        serde_path_to_error::deserialize(value).map_err(AppError::from)
    }

    /// 필수 필드를 검사합니다. 실패하면 필드명을 담은 `ValidationError`를 반환합니다.
    fn check(&self) -> AppResult<()> {
        self.validate().map_err(AppError::from)
    }
}
