//! API/페이지 라우트 설정 모듈
//!
//! 레지스트리에서 이름으로 해석한 컨트롤러를 `web::Data`로 등록하고,
//! 기능별로 그룹화된 핸들러를 경로에 연결합니다.
//!
//! # Route Groups
//!
//! - `GET /health` - 헬스체크
//! - `/api/*` - 공개 JSON API
//! - `/api/admin/*` - 관리자 JSON API (등록/수정/삭제, 사용자 관리)
//! - `/`, `/artwork`, `/exhibition`, `/notice`, `/user`, `/admin` - 렌더링된 페이지
//!
//! 인증/권한 검사는 이 백엔드 범위 밖이며, 앞단 게이트웨이에서 `/api/admin`과 `/admin`을 보호합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let controllers = Controllers::resolve(ServiceLocator::global())?;
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &controllers));
//! ```

use std::sync::Arc;
use actix_web::web;
use serde_json::json;
use crate::controllers::{
    AdminController, ArtworkController, ExhibitionController, HomeController, NoticeController, UserController,
};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::handlers;

/// 라우터가 사용하는 컨트롤러 묶음
///
/// 각 컨트롤러는 등록 이름으로 해석되며, 같은 로케이터에서는 항상 같은 인스턴스입니다.
#[derive(Clone)]
pub struct Controllers {
    pub artwork: Arc<ArtworkController>,
    pub exhibition: Arc<ExhibitionController>,
    pub notice: Arc<NoticeController>,
    pub user: Arc<UserController>,
    pub home: Arc<HomeController>,
    pub admin: Arc<AdminController>,
}

impl Controllers {
    pub fn resolve(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            artwork: locator.resolve_as::<ArtworkController>("artwork")?,
            exhibition: locator.resolve_as::<ExhibitionController>("exhibition")?,
            notice: locator.resolve_as::<NoticeController>("notice")?,
            user: locator.resolve_as::<UserController>("user")?,
            home: locator.resolve_as::<HomeController>("home")?,
            admin: locator.resolve_as::<AdminController>("admin")?,
        })
    }
}

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `controllers` - 핸들러에 주입할 컨트롤러 묶음
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, controllers: &Controllers) {
    cfg.app_data(json_config())
        .app_data(web::Data::from(controllers.artwork.clone()))
        .app_data(web::Data::from(controllers.exhibition.clone()))
        .app_data(web::Data::from(controllers.notice.clone()))
        .app_data(web::Data::from(controllers.user.clone()))
        .app_data(web::Data::from(controllers.home.clone()))
        .app_data(web::Data::from(controllers.admin.clone()));

    // Health check endpoint
    cfg.service(health_check);

    configure_api_routes(cfg);
    configure_admin_routes(cfg);
    configure_page_routes(cfg);
}

/// JSON 문법 오류, 본문 크기 초과 같은 본문 수준 실패를 `body` 검증 에러로 변환합니다.
///
/// 필드 타입 불일치는 핸들러의 `RequestDto::from_value`가 필드 경로와 함께 보고합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            log::warn!("요청 본문 파싱 실패: {}", err);
            AppError::field("body", err.to_string()).into()
        })
}

/// 공개 JSON API
///
/// - `GET /api/artworks`, `GET /api/artworks/featured`, `GET /api/artworks/{id}`
/// - `GET /api/exhibitions`, `GET /api/exhibitions/all`, `GET /api/exhibitions/{id}`
/// - `GET /api/notices`, `GET /api/notices/{id}`
/// - `GET /api/users/{id}`
///
/// ```bash
/// curl "http://localhost:8080/api/artworks/featured?view=modal"
/// ```
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/artworks")
            .service(handlers::artworks::list_artworks)
            // `/{id}`보다 먼저 등록
            .service(handlers::artworks::featured_artworks)
            .service(handlers::artworks::get_artwork)
    );

    cfg.service(
        web::scope("/api/exhibitions")
            .service(handlers::exhibitions::list_exhibitions)
            .service(handlers::exhibitions::all_exhibitions)
            .service(handlers::exhibitions::get_exhibition)
    );

    cfg.service(
        web::scope("/api/notices")
            .service(handlers::notices::list_notices)
            .service(handlers::notices::get_notice)
    );

    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::get_user)
    );
}

/// 관리자 JSON API
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/admin/notices/N1 \
///   -H "Content-Type: application/json" \
///   -d '{"title":"전시 일정 변경","content":"...","author":"U1","authorName":"관리자"}'
/// ```
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/artworks")
            .service(handlers::artworks::create_artwork)
            .service(handlers::artworks::update_artwork)
            .service(handlers::artworks::delete_artwork)
    );

    cfg.service(
        web::scope("/api/admin/exhibitions")
            .service(handlers::exhibitions::create_exhibition)
            .service(handlers::exhibitions::update_exhibition)
            .service(handlers::exhibitions::delete_exhibition)
    );

    cfg.service(
        web::scope("/api/admin/notices")
            .service(handlers::notices::admin_list_notices)
            .service(handlers::notices::create_notice)
            .service(handlers::notices::update_notice)
            .service(handlers::notices::delete_notice)
    );

    cfg.service(
        web::scope("/api/admin/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::set_user_active)
    );
}

/// 렌더링 페이지
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home_page)
        .service(handlers::pages::artwork_list_page)
        .service(handlers::pages::artwork_detail_page)
        .service(handlers::pages::exhibition_list_page)
        .service(handlers::pages::notice_list_page)
        .service(handlers::pages::notice_detail_page)
        .service(handlers::pages::user_profile_page)
        .service(handlers::pages::admin_dashboard_page);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "art_gallery_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "In-memory DataStore",
///     "rendering": "ShellRenderer",
///     "dependency_injection": "Component Registry"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "In-memory DataStore",
            "rendering": "ShellRenderer",
            "dependency_injection": "Component Registry"
        }
    }))
}
