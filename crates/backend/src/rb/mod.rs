pub mod error;
pub mod service;

pub use error::RbError;
pub use service::RbService;
