//! # Application Error Handling System
//!
//! 갤러리 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 컨트롤러가 반환한 에러가 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | Request DTO 검증 실패, 잘못된 쿼리 |
//! | `NotFound` | 404 Not Found | 작품/전시/공지/사용자 없음 |
//! | `ConflictError` | 409 Conflict | 전시 코드, 이메일 중복 |
//! | `RenderError` | 500 Internal Server Error | 페이지 렌더링 실패 |
//! | `ConfigurationError` | 500 Internal Server Error | 레지스트리/설정 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 검증 에러 메시지
//!
//! DTO 계층에서 발생하는 유일한 에러는 `ValidationError`이며,
//! 메시지는 항상 `필드명: 설명` 형태로 실패한 필드를 드러냅니다.
//!
//! ```rust,ignore
//! let request: NoticeRequestDTO = serde_json::from_value(body)?;
//! request.check()?; // Err(AppError::ValidationError("title: 제목은 필수입니다"))
//! ```

use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// Request DTO 검증, 페이지네이션 파라미터, 알 수 없는 변형 태그 등
    /// 클라이언트 입력이 잘못된 경우에 사용됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 페이지 렌더링 에러 (500 Internal Server Error)
    #[error("Render error: {0}")]
    RenderError(String),

    /// 레지스트리 또는 설정 에러 (500 Internal Server Error)
    ///
    /// 등록되지 않은 컴포넌트 요청, 순환 의존성, 타입 불일치 등
    /// 애플리케이션 조립 단계의 문제를 나타냅니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 특정 필드의 검증 실패를 나타내는 에러를 생성합니다.
    ///
    /// ```rust,ignore
    /// let err = AppError::field("title", "제목은 필수입니다");
    /// assert_eq!(err.to_string(), "Validation error: title: 제목은 필수입니다");
    /// ```
    pub fn field(field: &str, message: impl AsRef<str>) -> Self {
        AppError::ValidationError(format!("{}: {}", field, message.as_ref()))
    }

    /// 검증 에러가 주어진 필드(또는 그 하위 경로 `field[0]`, `field.key`)를 가리키는지 확인합니다.
    pub fn is_field_error(&self, field: &str) -> bool {
        match self {
            AppError::ValidationError(msg) => msg
                .split("; ")
                .filter_map(|part| part.split(':').next())
                .any(|path| {
                    path.strip_prefix(field)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with('[') || rest.starts_with('.'))
                }),
            _ => false,
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 결과를 `필드: 메시지` 목록으로 변환합니다.
    ///
    /// 필드명은 JSON 계약과 같은 camelCase로 표기하고,
    /// 필드명 기준으로 정렬하여 동일한 입력에 항상 동일한 메시지를 만듭니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                // 스키마 검증 에러는 메시지에 필드명을 직접 담습니다.
                let wire_name = (field != "__all__").then(|| to_wire_name(&field));
                field_errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    match &wire_name {
                        Some(name) => format!("{}: {}", name, message),
                        None => message,
                    }
                })
            })
            .collect();
        parts.sort();

        AppError::ValidationError(parts.join("; "))
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    /// 역직렬화 실패를 실패한 필드 경로(`title`, `exhibitionIds[0]`)의 검증 에러로 변환합니다.
    ///
    /// 경로가 없는 최상위 에러(객체가 아닌 본문 등)는 `body`로 표기합니다.
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = error.path().to_string();
        let field = if path == "." || path.is_empty() { "body" } else { path.as_str() };

        AppError::field(field, error.inner().to_string())
    }
}

/// `author_name` → `authorName`
fn to_wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입을 상태 코드와 `{"error": "..."}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let seed = std::fs::read_to_string(path).context("시드 파일 읽기 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
