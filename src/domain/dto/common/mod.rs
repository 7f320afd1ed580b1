//! # 공통 DTO
//!
//! 여러 도메인이 함께 쓰는 DTO 구성 요소입니다.
//!
//! - [`variant`] - Simple DTO 변형 (`card` / `modal` / `default`)
//! - [`pagination`] - 페이지네이션 옵션, 페이지 결과, 목록 DTO

pub mod variant;
pub mod pagination;

pub use variant::SimpleVariant;
pub use pagination::{ListQuery, Page, PagedListDTO, PaginationInfo, PaginationOptions, SimpleProjection};

/// 이미지 URL 최적화 협력자
///
/// Detail DTO는 이미지 필드마다 한 번씩 호출합니다.
/// 빈 입력에는 빈 문자열을 돌려줘야 합니다.
pub trait ImageUrlOptimizer: Send + Sync {
    fn optimize(&self, raw_url: &str) -> String;
}

/// 최적화 결과를 선택 이미지 필드 값으로 변환합니다. 빈 결과는 `None`입니다.
pub fn optimize_optional(optimizer: &dyn ImageUrlOptimizer, raw_url: Option<&str>) -> Option<String> {
    raw_url
        .map(|url| optimizer.optimize(url))
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ImageUrlOptimizer;

    /// 테스트용 최적화기: `opt:` 접두사를 붙입니다.
    pub struct PrefixOptimizer;

    impl ImageUrlOptimizer for PrefixOptimizer {
        fn optimize(&self, raw_url: &str) -> String {
            if raw_url.is_empty() {
                String::new()
            } else {
                format!("opt:{}", raw_url)
            }
        }
    }
}
