use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionSetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
