pub mod wav;

pub use wav::{DataSection, FormatTag, ReaderOptions, WavFormat, WavReader};
