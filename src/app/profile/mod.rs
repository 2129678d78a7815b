//! 用户资料模块

pub mod handler;
pub mod model;
pub mod service;

pub use handler::AppState;
pub use model::{UserProfile, DEMO_USER};
pub use service::ProfileService;
