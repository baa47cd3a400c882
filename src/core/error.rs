use crate::container::FormatTag;

pub type Result<T> = std::result::Result<T, WavError>;

#[derive(Debug, thiserror::Error)]
pub enum WavError {
	#[error("fmt chunk not found")]
	FormatChunkNotFound,

	#[error("data chunk not found")]
	DataChunkNotFound,

	#[error("fmt chunk truncated")]
	FormatChunkTruncated,

	#[error("unsupported format tag: {0}")]
	UnsupportedFormat(u16),

	#[error("unsupported bit depth for {format}: {bits}")]
	UnsupportedBitDepth { format: FormatTag, bits: u16 },

	#[error("invalid channel count: 0")]
	InvalidChannelCount,

	#[error("block size is zero or exceeds the block length limit")]
	InvalidBlockSize,

	#[error("sample out of range: frame {frame}, channel {channel}")]
	SampleOutOfRange { frame: usize, channel: usize },

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl WavError {
	/// True for failures caused by the container contents rather than the loader.
	pub fn is_format_error(&self) -> bool {
		!matches!(self, WavError::Io(_) | WavError::InvalidBlockSize | WavError::SampleOutOfRange { .. })
	}
}
