use thiserror::Error;

#[derive(Error, Debug)]
/// Byte store error
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
