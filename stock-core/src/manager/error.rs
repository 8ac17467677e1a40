use crate::storage::StorageError;
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid quantity: {0} (must be a positive integer)")]
    InvalidQuantity(u32),
}

pub type ManagerResult<T> = Result<T, ManagerError>;
