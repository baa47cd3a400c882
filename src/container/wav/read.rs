use super::{
	DATA_SEARCH_LIMIT, DEFAULT_BLOCK_SIZE, DataSection, FMT_SEARCH_LIMIT, FormatTag, MAX_BLOCK_LEN, WavFormat,
};
use crate::codecs::SampleDecoder;
use crate::core::{BlockIterator, Result, WavError};
use crate::io::{LoadMode, MediaSource, ReadPrimitives, find_tag, find_tag_from};
use std::path::Path;

const FMT_TAG: &[u8] = b"fmt ";
const DATA_TAG: &[u8] = b"data";
const CHUNK_HEADER_SIZE: usize = 8;
const FMT_BODY_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
	/// Frames per decoded block.
	pub block_size: usize,
	/// Absolute byte limit for locating the `fmt ` chunk.
	pub fmt_search_limit: usize,
	/// Absolute byte limit for locating the `data` chunk.
	pub data_search_limit: usize,
}

impl Default for ReaderOptions {
	fn default() -> Self {
		Self {
			block_size: DEFAULT_BLOCK_SIZE,
			fmt_search_limit: FMT_SEARCH_LIMIT,
			data_search_limit: DATA_SEARCH_LIMIT,
		}
	}
}

impl ReaderOptions {
	pub fn with_block_size(mut self, block_size: usize) -> Self {
		self.block_size = block_size;
		self
	}

	pub fn with_fmt_search_limit(mut self, limit: usize) -> Self {
		self.fmt_search_limit = limit;
		self
	}

	pub fn with_data_search_limit(mut self, limit: usize) -> Self {
		self.data_search_limit = limit;
		self
	}
}

/// A parsed WAVE container over an in-memory byte buffer.
///
/// Header metadata is parsed once in the constructor. Decoding happens through
/// [`WavReader::blocks`], which may be called any number of times; every iterator
/// owns a private cursor and only reads the shared buffer.
pub struct WavReader<S> {
	source: S,
	format: WavFormat,
	data: DataSection,
	decoder: SampleDecoder,
	block_size: usize,
}

impl<S: AsRef<[u8]>> WavReader<S> {
	pub fn new(source: S) -> Result<Self> {
		Self::with_options(source, ReaderOptions::default())
	}

	pub fn with_block_size(source: S, block_size: usize) -> Result<Self> {
		Self::with_options(source, ReaderOptions::default().with_block_size(block_size))
	}

	pub fn with_options(source: S, options: ReaderOptions) -> Result<Self> {
		if options.block_size == 0 {
			return Err(WavError::InvalidBlockSize);
		}

		let bytes = source.as_ref();
		let (format, fmt_end) = read_format(bytes, options.fmt_search_limit)?;
		match options.block_size.checked_mul(format.channels as usize) {
			Some(len) if len <= MAX_BLOCK_LEN => {}
			_ => return Err(WavError::InvalidBlockSize),
		}
		let data = read_data(bytes, &format, fmt_end, options.data_search_limit)?;
		let decoder = SampleDecoder::for_format(&format)?;

		Ok(Self { source, format, data, decoder, block_size: options.block_size })
	}

	pub fn format(&self) -> WavFormat {
		self.format
	}

	pub fn data(&self) -> DataSection {
		self.data
	}

	pub fn decoder(&self) -> SampleDecoder {
		self.decoder
	}

	pub fn block_size(&self) -> usize {
		self.block_size
	}

	pub fn num_frames(&self) -> usize {
		self.data.num_frames
	}

	pub fn num_samples(&self) -> usize {
		self.data.num_samples(&self.format)
	}

	/// Number of blocks a fresh iterator yields before end-of-stream.
	pub fn num_blocks(&self) -> usize {
		self.data.num_frames.div_ceil(self.block_size)
	}

	pub fn duration(&self) -> f64 {
		if self.format.sample_rate == 0 {
			return 0.0;
		}
		self.data.num_frames as f64 / self.format.sample_rate as f64
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	pub fn bytes(&self) -> &[u8] {
		self.source.as_ref()
	}

	pub fn into_source(self) -> S {
		self.source
	}

	/// Starts a new pass over the samples, borrowing the buffer.
	pub fn blocks(&self) -> BlockIterator<&[u8]> {
		BlockIterator::new(self.source.as_ref(), self.format, self.data, self.decoder, self.block_size)
	}

	/// Starts a pass that owns the buffer.
	pub fn into_blocks(self) -> BlockIterator<S> {
		BlockIterator::new(self.source, self.format, self.data, self.decoder, self.block_size)
	}
}

impl WavReader<MediaSource> {
	/// Memory-maps `path` and parses it with default options.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		Self::open_with(path, ReaderOptions::default(), LoadMode::Mapped)
	}

	pub fn open_with<P: AsRef<Path>>(path: P, options: ReaderOptions, mode: LoadMode) -> Result<Self> {
		let path = path.as_ref();
		let source = MediaSource::open(path, mode)?;
		tracing::debug!("loaded {} ({} bytes, mapped={})", path.display(), source.len(), source.is_mapped());
		Self::with_options(source, options)
	}
}

/// Parses the `fmt ` chunk and returns the format plus the offset just past its body.
fn read_format(bytes: &[u8], search_limit: usize) -> Result<(WavFormat, usize)> {
	let start = find_tag(bytes, FMT_TAG, Some(search_limit)).ok_or(WavError::FormatChunkNotFound)?;
	let body = start + CHUNK_HEADER_SIZE;

	if bytes.len() < body + FMT_BODY_SIZE {
		return Err(WavError::FormatChunkTruncated);
	}

	let field_u16 = |at: usize| bytes.read_u16_le_at(body + at).ok_or(WavError::FormatChunkTruncated);
	let field_u32 = |at: usize| bytes.read_u32_le_at(body + at).ok_or(WavError::FormatChunkTruncated);

	let chunk_size = bytes.read_u32_le_at(start + 4).ok_or(WavError::FormatChunkTruncated)?;
	let code = field_u16(0)?;
	let channels = field_u16(2)?;
	let sample_rate = field_u32(4)?;
	let bits_per_sample = field_u16(14)?;

	let format_tag = FormatTag::from_code(code)?;
	let format = WavFormat::new(format_tag, channels, sample_rate, bits_per_sample)?;

	tracing::debug!(
		"fmt chunk at {}: {}, {} ch, {} Hz, {} bit",
		start,
		format.format_tag,
		format.channels,
		format.sample_rate,
		format.bits_per_sample
	);

	let body_len = (chunk_size as usize).max(FMT_BODY_SIZE);
	let end = body.saturating_add(body_len).min(bytes.len());

	Ok((format, end))
}

fn read_data(
	bytes: &[u8],
	format: &WavFormat,
	search_start: usize,
	search_limit: usize,
) -> Result<DataSection> {
	let start = find_tag_from(bytes, DATA_TAG, search_start, Some(search_limit))
		.ok_or(WavError::DataChunkNotFound)?;
	let declared_size = bytes.read_u32_le_at(start + 4).ok_or(WavError::DataChunkNotFound)?;

	let data = DataSection::new(start + CHUNK_HEADER_SIZE, declared_size, bytes.len(), format);

	if data.is_truncated(bytes.len()) {
		tracing::warn!(
			"data chunk declares {} bytes but only {} are present; decoding {} frames",
			declared_size,
			bytes.len().saturating_sub(data.offset),
			data.num_frames
		);
	}

	tracing::debug!("data chunk at {}: {} frames", start, data.num_frames);

	Ok(data)
}
