pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid identifier: {0:?} (expected decimal digits)")]
    InvalidId(String),
    
    #[error("Unknown action: {0:?} (expected on, off or toggle)")]
    UnknownAction(String),
}
