//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request.rs   # UserRequestDTO, UserActiveRequestDTO
//! └── response.rs  # UserResponseDTO, UserSimpleDTO, UserListDTO
//! ```
//!
//! `UserSimpleDTO`는 작가 카드/모달에 쓰이며 변형에 따라 `type`, `email`, `role`이 추가됩니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
