//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CORS, 시드 데이터 관련 설정을 관리합니다.
//! 각 설정은 환경 변수를 직접 읽는 함수와, 테스트에서 환경 변수 대신
//! 조회 함수를 주입할 수 있는 `*_from` 함수를 함께 제공합니다.

use std::env;

/// 환경 변수 조회 함수 타입
///
/// 테스트에서는 `&|key| map.get(key).cloned()` 같은 클로저를 넘깁니다.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 프로세스 환경 변수 조회
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::current_from(&process_env)
    }

    pub fn current_from(lookup: EnvLookup) -> Self {
        Self::from_str(&lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        Self::port_from(&process_env)
    }

    pub fn port_from(lookup: EnvLookup) -> u16 {
        lookup("PORT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        Self::host_from(&process_env)
    }

    pub fn host_from(lookup: EnvLookup) -> String {
        lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 기본값 4, 0 이하 값은 무시합니다.
    pub fn workers() -> usize {
        Self::workers_from(&process_env)
    }

    pub fn workers_from(lookup: EnvLookup) -> usize {
        lookup("WORKERS")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분된 목록을 지정합니다.
    /// 비어 있으면 로컬 개발용 기본 목록을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::allowed_origins_from(&process_env)
    }

    pub fn allowed_origins_from(lookup: EnvLookup) -> Vec<String> {
        let configured: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        if configured.is_empty() {
            Self::DEFAULT_ORIGINS.iter().map(|origin| origin.to_string()).collect()
        } else {
            configured
        }
    }
}

/// 초기 데이터 설정
pub struct SeedConfig;

impl SeedConfig {
    /// 인메모리 스토어에 적재할 JSON 시드 파일 경로 (`SEED_DATA_PATH`)
    pub fn data_path() -> Option<String> {
        Self::data_path_from(&process_env)
    }

    pub fn data_path_from(lookup: EnvLookup) -> Option<String> {
        lookup("SEED_DATA_PATH")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
    }
}
