use dynamic_array::ArrayError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,

    #[error("heap storage: {0}")]
    Storage(#[from] ArrayError),
}

pub type Result<T> = std::result::Result<T, HeapError>;
