//! # HTTP Request Handlers Module
//!
//! 라우트에 연결되는 얇은 핸들러 함수들입니다.
//! 핸들러는 요청에서 경로/쿼리/본문을 꺼내 `web::Data`로 주입된 컨트롤러에 넘기고,
//! 컨트롤러가 돌려준 `HttpResponse` 또는 `AppError`를 그대로 반환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Admin UI)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 추출                  ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Controllers - 응답/페이지 구성                  ← Controller Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 `{"error": "..."}` 본문을 만듭니다.
//! JSON 본문 파싱 실패는 라우트 설정의 `JsonConfig`가 `ValidationError`로 바꿉니다.

pub mod artworks;
pub mod exhibitions;
pub mod notices;
pub mod users;
pub mod pages;
