mod error;
mod heap;
mod heapsort;
mod sift;
mod storage;

pub use error::{HeapError, Result};
pub use heap::MinHeap;
pub use heapsort::heapsort;
pub use sift::{heapify, percolate_down};
pub use storage::HeapStorage;
