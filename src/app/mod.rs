//! 应用层

pub mod profile;
pub mod router;

pub use router::{router, PROFILE_PATH};
