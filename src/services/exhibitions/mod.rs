pub mod exhibition_service;

pub use exhibition_service::*;
