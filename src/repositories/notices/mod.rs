pub mod notice_repo;

pub use notice_repo::*;
