//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 슬러그 생성
//! - [`display_terminal`] - 레지스트리 초기화 터미널 출력

pub mod string_utils;
pub mod display_terminal;
