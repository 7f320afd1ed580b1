//! # Controllers Module
//!
//! 라우터가 이름으로 해석해 사용하는 컨트롤러 계층입니다.
//! 컨트롤러는 서비스와 렌더러를 주입받아 요청 하나를 `HttpResponse` 하나로 만듭니다.
//!
//! ## 등록 이름
//!
//! | 이름 | 타입 | 담당 |
//! |------|------|------|
//! | `artwork` | [`ArtworkController`] | 작품 API, 작품 목록/상세 페이지 |
//! | `exhibition` | [`ExhibitionController`] | 전시 API, 전시 목록 페이지 |
//! | `notice` | [`NoticeController`] | 공지 API, 공지 목록/상세 페이지 |
//! | `user` | [`UserController`] | 사용자 API, 프로필 페이지 |
//! | `home` | [`HomeController`] | 홈 페이지 |
//! | `admin` | [`AdminController`] | 관리자 대시보드 |
//!
//! ```rust,ignore
//! let artworks = locator.resolve_as::<ArtworkController>("artwork")?;
//! let response = artworks.list(&ListQuery::default()).await?;
//! ```

pub mod artwork_controller;
pub mod exhibition_controller;
pub mod notice_controller;
pub mod user_controller;
pub mod home_controller;
pub mod admin_controller;

pub use artwork_controller::ArtworkController;
pub use exhibition_controller::ExhibitionController;
pub use notice_controller::NoticeController;
pub use user_controller::UserController;
pub use home_controller::HomeController;
pub use admin_controller::AdminController;

use std::sync::Arc;
use actix_web::HttpResponse;
use crate::core::errors::AppResult;
use crate::core::registry::ServiceLocator;
use crate::domain::views::ViewDto;
use crate::services::rendering::{ShellRenderer, ViewRenderer};

/// 로케이터에 등록된 기본 렌더러
pub(crate) fn locate_renderer(locator: &ServiceLocator) -> AppResult<Arc<dyn ViewRenderer>> {
    let renderer: Arc<dyn ViewRenderer> = locator.get::<ShellRenderer>()?;
    Ok(renderer)
}

/// View DTO를 템플릿으로 렌더링해 HTML 응답을 만듭니다.
pub(crate) async fn render_page<V: ViewDto>(renderer: &dyn ViewRenderer, view: &V) -> AppResult<HttpResponse> {
    let html = renderer.render(V::TEMPLATE, view.to_view()).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
