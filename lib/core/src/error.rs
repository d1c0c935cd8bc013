use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Job role not found: {0}")]
    RoleNotFound(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
