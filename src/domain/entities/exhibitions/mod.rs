//! Exhibitions Entity Module
//!
//! 전시 엔티티와 전시 유형(`regular` / `other`)을 정의합니다.

pub mod exhibition;
