pub mod decode;

pub use decode::{SampleDecoder, decode_sample};
