use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobSpecError {
    #[error("Invalid job key path (expected role/environment/name): {0}")]
    InvalidJobKeyPath(String),
}

pub type Result<T> = std::result::Result<T, JobSpecError>;
