pub mod artwork_service;

pub use artwork_service::*;
