pub mod cli;
pub mod codecs;
pub mod container;
pub mod core;
pub mod ffi;
pub mod io;
pub mod show;

pub use codecs::SampleDecoder;
pub use container::{DataSection, FormatTag, ReaderOptions, WavFormat, WavReader};
pub use crate::core::{BlockIterator, BlockState, OwnedBlocks, Result, WavError};
pub use io::{LoadMode, MediaSource};
