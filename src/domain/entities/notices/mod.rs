//! Notices Entity Module
//!
//! 공지사항 엔티티와 게시 상태(`active` / `inactive`)를 정의합니다.

pub mod notice;
