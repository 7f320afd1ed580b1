pub mod artwork_repo;

pub use artwork_repo::*;
