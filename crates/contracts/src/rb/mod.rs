pub mod config;
pub mod user;

pub use config::RbConfig;
pub use user::RbUserInfo;
