pub mod read;

pub use read::{ReaderOptions, WavReader};

use crate::core::{Result, WavError};
use std::fmt;

pub const DEFAULT_BLOCK_SIZE: usize = 1024;
/// Upper bound on `block_size * channels`, the length of one decoded block.
pub const MAX_BLOCK_LEN: usize = 1 << 24;
pub const FMT_SEARCH_LIMIT: usize = 2048;
pub const DATA_SEARCH_LIMIT: usize = 4096;

pub const WAVE_FORMAT_PCM: u16 = 1;
pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
	Pcm,
	IeeeFloat,
}

impl FormatTag {
	pub fn from_code(code: u16) -> Result<Self> {
		match code {
			WAVE_FORMAT_PCM => Ok(FormatTag::Pcm),
			WAVE_FORMAT_IEEE_FLOAT => Ok(FormatTag::IeeeFloat),
			other => Err(WavError::UnsupportedFormat(other)),
		}
	}

	pub fn code(&self) -> u16 {
		match self {
			FormatTag::Pcm => WAVE_FORMAT_PCM,
			FormatTag::IeeeFloat => WAVE_FORMAT_IEEE_FLOAT,
		}
	}

	pub fn supports(&self, bits: u16) -> bool {
		match self {
			FormatTag::Pcm => matches!(bits, 8 | 16 | 24 | 32),
			FormatTag::IeeeFloat => matches!(bits, 32 | 64),
		}
	}
}

impl fmt::Display for FormatTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormatTag::Pcm => write!(f, "PCM"),
			FormatTag::IeeeFloat => write!(f, "IEEE float"),
		}
	}
}

/// Audio encoding declared by the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub format_tag: FormatTag,
	pub channels: u16,
	pub sample_rate: u32,
	pub bits_per_sample: u16,
}

impl WavFormat {
	/// Builds a format, rejecting encodings the decoder cannot handle.
	pub fn new(
		format_tag: FormatTag,
		channels: u16,
		sample_rate: u32,
		bits_per_sample: u16,
	) -> Result<Self> {
		if channels == 0 {
			return Err(WavError::InvalidChannelCount);
		}

		if !format_tag.supports(bits_per_sample) {
			return Err(WavError::UnsupportedBitDepth { format: format_tag, bits: bits_per_sample });
		}

		Ok(Self { format_tag, channels, sample_rate, bits_per_sample })
	}

	pub fn bytes_per_sample(&self) -> usize {
		(self.bits_per_sample / 8) as usize
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample() * self.channels as usize
	}

	pub fn codec_name(&self) -> String {
		match self.format_tag {
			FormatTag::Pcm if self.bits_per_sample == 8 => "pcm_s8".to_string(),
			FormatTag::Pcm => format!("pcm_s{}le", self.bits_per_sample),
			FormatTag::IeeeFloat => format!("pcm_f{}le", self.bits_per_sample),
		}
	}
}

/// Location and extent of the sample payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSection {
	/// Absolute offset of the first sample byte.
	pub offset: usize,
	/// Size written in the `data` chunk header.
	pub declared_size: u32,
	/// Whole frames the buffer can actually supply.
	pub num_frames: usize,
}

impl DataSection {
	/// Derives the frame count, dropping any trailing partial frame and clamping
	/// the declared size to the bytes present after `offset`.
	pub fn new(offset: usize, declared_size: u32, buffer_len: usize, format: &WavFormat) -> Self {
		let available = buffer_len.saturating_sub(offset);
		let usable = (declared_size as usize).min(available);
		let num_frames = usable / format.bytes_per_frame();

		Self { offset, declared_size, num_frames }
	}

	pub fn num_samples(&self, format: &WavFormat) -> usize {
		self.num_frames * format.channels as usize
	}

	/// True when the buffer ends before the declared data size.
	pub fn is_truncated(&self, buffer_len: usize) -> bool {
		buffer_len.saturating_sub(self.offset) < self.declared_size as usize
	}
}
