pub mod pcm;

pub use pcm::{SampleDecoder, decode_sample};
