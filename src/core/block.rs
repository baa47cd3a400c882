use crate::codecs::SampleDecoder;
use crate::container::{DataSection, WavFormat};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
	Active,
	Exhausted,
}

/// Cursor producing fixed-size blocks of interleaved, normalized samples.
///
/// Every block holds `block_size * channels` values. The final block of a stream is
/// zero-padded past the last decoded frame. The output buffer is allocated once and
/// reused, so the slice returned by [`next_block`](Self::next_block) is only valid
/// until the next call; copy it (or use [`owned`](Self::owned)) to keep it.
///
/// After the last frame the iterator is exhausted for good; start a new pass from the
/// reader to decode again.
pub struct BlockIterator<S> {
	source: S,
	decoder: SampleDecoder,
	data: DataSection,
	channels: usize,
	bytes_per_frame: usize,
	block_size: usize,
	frame_index: usize,
	buffer: Vec<f32>,
	state: BlockState,
}

impl<S: AsRef<[u8]>> BlockIterator<S> {
	/// `data` must have been derived from `source`, which bounds every read.
	pub(crate) fn new(
		source: S,
		format: WavFormat,
		data: DataSection,
		decoder: SampleDecoder,
		block_size: usize,
	) -> Self {
		let channels = format.channels as usize;
		let state = if data.num_frames == 0 { BlockState::Exhausted } else { BlockState::Active };

		Self {
			source,
			decoder,
			data,
			channels,
			bytes_per_frame: format.bytes_per_frame(),
			block_size,
			frame_index: 0,
			buffer: vec![0.0; block_size * channels],
			state,
		}
	}

	/// Decodes the next block, or returns `None` once every frame has been produced.
	pub fn next_block(&mut self) -> Option<&[f32]> {
		self.advance()?;
		Some(&self.buffer)
	}

	/// Decodes the next block into `out` and returns the number of frames decoded.
	///
	/// Copies at most `out.len()` values; a full block needs [`block_len`](Self::block_len).
	pub fn read_block(&mut self, out: &mut [f32]) -> Option<usize> {
		let frames = self.advance()?;
		let count = out.len().min(self.buffer.len());
		out[..count].copy_from_slice(&self.buffer[..count]);
		Some(frames)
	}

	/// Consumes the iterator into one that allocates a `Vec` per block.
	pub fn owned(self) -> OwnedBlocks<S> {
		OwnedBlocks { inner: self }
	}

	fn advance(&mut self) -> Option<usize> {
		if self.state == BlockState::Exhausted {
			return None;
		}

		let frames = self.block_size.min(self.data.num_frames - self.frame_index);
		let samples = frames * self.channels;
		let start = self.data.offset + self.frame_index * self.bytes_per_frame;
		let end = start + frames * self.bytes_per_frame;

		let src = &self.source.as_ref()[start..end];
		let decoded = self.decoder.decode_into(src, &mut self.buffer[..samples]);
		debug_assert_eq!(decoded, samples);

		// stale samples from the previous block must not leak into a short final block
		self.buffer[samples..].fill(0.0);

		self.frame_index += frames;
		if self.frame_index == self.data.num_frames {
			self.state = BlockState::Exhausted;
		}

		tracing::trace!("decoded {} frames, cursor at {}/{}", frames, self.frame_index, self.data.num_frames);

		Some(frames)
	}

	/// Index of the next frame to decode.
	pub fn position(&self) -> usize {
		self.frame_index
	}

	pub fn remaining_frames(&self) -> usize {
		self.data.num_frames - self.frame_index
	}

	pub fn remaining_blocks(&self) -> usize {
		self.remaining_frames().div_ceil(self.block_size)
	}

	pub fn num_frames(&self) -> usize {
		self.data.num_frames
	}

	pub fn block_size(&self) -> usize {
		self.block_size
	}

	pub fn channels(&self) -> usize {
		self.channels
	}

	/// Values per block: `block_size * channels`.
	pub fn block_len(&self) -> usize {
		self.buffer.len()
	}

	pub fn state(&self) -> BlockState {
		self.state
	}

	pub fn is_exhausted(&self) -> bool {
		self.state == BlockState::Exhausted
	}
}

/// Allocating adapter over [`BlockIterator`]; each item is an independent copy.
pub struct OwnedBlocks<S> {
	inner: BlockIterator<S>,
}

impl<S: AsRef<[u8]>> Iterator for OwnedBlocks<S> {
	type Item = Vec<f32>;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next_block().map(<[f32]>::to_vec)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.inner.remaining_blocks();
		(remaining, Some(remaining))
	}
}

impl<S: AsRef<[u8]>> ExactSizeIterator for OwnedBlocks<S> {}

impl<S: AsRef<[u8]>> FusedIterator for OwnedBlocks<S> {}
