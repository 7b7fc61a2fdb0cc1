use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RbError {
    #[error("only room booking admins may use admin override")]
    Forbidden,
}

impl RbError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            RbError::Forbidden => axum::http::StatusCode::FORBIDDEN,
        }
    }
}
