pub mod block;
pub mod error;

pub use block::{BlockIterator, BlockState, OwnedBlocks};
pub use error::{Result, WavError};
