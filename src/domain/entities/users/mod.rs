//! Users Entity Module
//!
//! 사용자 엔티티와 역할(`admin` / `member` / `external`)을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{User, UserRole};
//!
//! let user = User::new(
//!     "kim@example.ac.kr".to_string(),
//!     "Kim".to_string(),
//!     "Art".to_string(),
//!     UserRole::Member,
//! );
//! ```

pub mod user;
