pub mod exhibition_repo;

pub use exhibition_repo::*;
