//! # View DTO Module
//!
//! 서버 렌더링 페이지에 넘기는 데이터 모양을 정의합니다.
//!
//! View DTO는 모든 필드에 기본값을 가지므로 일부 데이터가 없어도 페이지가 렌더링됩니다.
//! 페이지 정보가 주어지지 않으면 `{currentPage: 1, totalPages: 1, total: 0}`이 됩니다.
//! View DTO는 검증하지 않습니다.
//!
//! ```rust,ignore
//! let view = NoticeListViewDTO::new(list);
//! let html = renderer.render(NoticeListViewDTO::TEMPLATE, view.to_view()).await?;
//! ```

pub mod home;
pub mod artworks;
pub mod exhibitions;
pub mod notices;
pub mod users;
pub mod admin;

pub use home::*;
pub use artworks::*;
pub use exhibitions::*;
pub use notices::*;
pub use users::*;
pub use admin::*;

use serde::Serialize;
use serde_json::{Map, Value};

/// 페이지 렌더러에 넘기는 View DTO
pub trait ViewDto: Serialize {
    /// 렌더링에 사용할 템플릿 이름
    const TEMPLATE: &'static str;

    /// 렌더러가 그대로 사용하는 평범한 JSON 객체로 변환합니다.
    fn to_view(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
