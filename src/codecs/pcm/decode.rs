use crate::container::{FormatTag, WavFormat};
use crate::core::{Result, WavError};

/// Sample encoding resolved once from the container format.
///
/// PCM variants assemble the little-endian bytes into the top of a 32-bit word and
/// shift right arithmetically, which sign-extends any width. The result is scaled by
/// `1 / 2^(W-1)`, so the most negative code is exactly -1.0. Float variants are
/// passed through without rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDecoder {
	Pcm8,
	Pcm16,
	Pcm24,
	Pcm32,
	Float32,
	Float64,
}

impl SampleDecoder {
	pub fn for_format(format: &WavFormat) -> Result<Self> {
		let decoder = match (format.format_tag, format.bits_per_sample) {
			(FormatTag::Pcm, 8) => SampleDecoder::Pcm8,
			(FormatTag::Pcm, 16) => SampleDecoder::Pcm16,
			(FormatTag::Pcm, 24) => SampleDecoder::Pcm24,
			(FormatTag::Pcm, 32) => SampleDecoder::Pcm32,
			(FormatTag::IeeeFloat, 32) => SampleDecoder::Float32,
			(FormatTag::IeeeFloat, 64) => SampleDecoder::Float64,
			(format, bits) => return Err(WavError::UnsupportedBitDepth { format, bits }),
		};
		Ok(decoder)
	}

	pub fn bytes_per_sample(&self) -> usize {
		match self {
			SampleDecoder::Pcm8 => 1,
			SampleDecoder::Pcm16 => 2,
			SampleDecoder::Pcm24 => 3,
			SampleDecoder::Pcm32 | SampleDecoder::Float32 => 4,
			SampleDecoder::Float64 => 8,
		}
	}

	/// Decodes the sample starting at `offset`.
	///
	/// Panics if `bytes` does not hold a whole sample at `offset`.
	#[inline]
	pub fn decode(&self, bytes: &[u8], offset: usize) -> f32 {
		let raw = &bytes[offset..offset + self.bytes_per_sample()];
		match self {
			SampleDecoder::Pcm8 => pcm::<1>(raw),
			SampleDecoder::Pcm16 => pcm::<2>(raw),
			SampleDecoder::Pcm24 => pcm::<3>(raw),
			SampleDecoder::Pcm32 => pcm::<4>(raw),
			SampleDecoder::Float32 => float32(raw),
			SampleDecoder::Float64 => float64(raw),
		}
	}

	/// Decodes a contiguous run of samples from `src` into `dst`.
	///
	/// Decodes `min(src.len() / bytes_per_sample, dst.len())` samples and returns that
	/// count. The encoding is matched once for the whole run.
	pub fn decode_into(&self, src: &[u8], dst: &mut [f32]) -> usize {
		match self {
			SampleDecoder::Pcm8 => decode_run(src, dst, 1, pcm::<1>),
			SampleDecoder::Pcm16 => decode_run(src, dst, 2, pcm::<2>),
			SampleDecoder::Pcm24 => decode_run(src, dst, 3, pcm::<3>),
			SampleDecoder::Pcm32 => decode_run(src, dst, 4, pcm::<4>),
			SampleDecoder::Float32 => decode_run(src, dst, 4, float32),
			SampleDecoder::Float64 => decode_run(src, dst, 8, float64),
		}
	}
}

/// Decodes the sample of `channel` in `frame` from a data payload at `data_offset`.
///
/// Fails with [`WavError::SampleOutOfRange`] when the sample does not lie entirely inside `bytes`.
pub fn decode_sample(
	bytes: &[u8],
	data_offset: usize,
	frame: usize,
	channel: usize,
	format: &WavFormat,
) -> Result<f32> {
	let decoder = SampleDecoder::for_format(format)?;
	if channel >= format.channels as usize {
		return Err(WavError::SampleOutOfRange { frame, channel });
	}

	let offset = frame
		.checked_mul(format.bytes_per_frame())
		.and_then(|at| at.checked_add(channel * format.bytes_per_sample()))
		.and_then(|at| at.checked_add(data_offset))
		.filter(|&at| at.checked_add(decoder.bytes_per_sample()).is_some_and(|end| end <= bytes.len()))
		.ok_or(WavError::SampleOutOfRange { frame, channel })?;

	Ok(decoder.decode(bytes, offset))
}

#[inline]
fn decode_run<F: Fn(&[u8]) -> f32>(src: &[u8], dst: &mut [f32], width: usize, decode: F) -> usize {
	let mut count = 0;
	for (out, raw) in dst.iter_mut().zip(src.chunks_exact(width)) {
		*out = decode(raw);
		count += 1;
	}
	count
}

#[inline]
fn pcm<const N: usize>(raw: &[u8]) -> f32 {
	let shift = 32 - 8 * N as u32;
	let scale = 1.0 / (1u64 << (8 * N - 1)) as f64;

	// each byte enters at the top, pushing earlier (less significant) bytes down
	let mut word = 0u32;
	for &byte in &raw[..N] {
		word = (word >> 8) | ((byte as u32) << 24);
	}

	let value = (word as i32) >> shift;
	(value as f64 * scale) as f32
}

#[inline]
fn float32(raw: &[u8]) -> f32 {
	f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])
}

#[inline]
fn float64(raw: &[u8]) -> f32 {
	f64::from_le_bytes([raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7]]) as f32
}
