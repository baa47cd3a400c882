//! C ABI for hosts that embed the decoder.
//!
//! One decoding session is active at a time. `wav_initialize` opens a file and
//! replaces any previous session; `wav_get_next_block` then copies successive blocks
//! into caller storage until it reports end of stream.

use crate::container::{ReaderOptions, WavReader};
use crate::core::BlockIterator;
use crate::io::{LoadMode, MediaSource};
use std::ffi::{CStr, c_char, c_int};
use std::sync::{Mutex, MutexGuard};

pub const WAV_OK: c_int = 0;
pub const WAV_NOT_INITIALIZED: c_int = 1;
pub const WAV_END_OF_STREAM: c_int = 2;
pub const WAV_INIT_FAILED: c_int = -1;

static SESSION: Mutex<Option<BlockIterator<MediaSource>>> = Mutex::new(None);

fn session() -> MutexGuard<'static, Option<BlockIterator<MediaSource>>> {
	// a panic while holding the lock leaves the iterator itself consistent
	SESSION.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Opens `path` and prepares to decode it in blocks of `block_size` frames.
///
/// Returns `WAV_OK`, or `WAV_INIT_FAILED` if the path is invalid, the file cannot be
/// opened or parsed, or `block_size` is not positive. A failed call leaves no session.
///
/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wav_initialize(path: *const c_char, block_size: c_int) -> c_int {
	let mut active = session();
	*active = None;

	if path.is_null() {
		tracing::error!("wav_initialize: null path");
		return WAV_INIT_FAILED;
	}

	// SAFETY: checked non-null above; the caller guarantees NUL termination.
	let path = match unsafe { CStr::from_ptr(path) }.to_str() {
		Ok(path) => path,
		Err(_) => {
			tracing::error!("wav_initialize: path is not valid UTF-8");
			return WAV_INIT_FAILED;
		}
	};

	let Ok(block_size) = usize::try_from(block_size) else {
		tracing::error!("wav_initialize: negative block size {}", block_size);
		return WAV_INIT_FAILED;
	};

	let options = ReaderOptions::default().with_block_size(block_size);
	match WavReader::open_with(path, options, LoadMode::Mapped) {
		Ok(reader) => {
			tracing::debug!("wav_initialize: {} ({} frames)", path, reader.num_frames());
			*active = Some(reader.into_blocks());
			WAV_OK
		}
		Err(e) => {
			tracing::error!("wav_initialize: {}: {}", path, e);
			WAV_INIT_FAILED
		}
	}
}

/// Decodes the next block into `out`.
///
/// Returns `WAV_OK` after writing `wav_block_len()` floats, `WAV_NOT_INITIALIZED`
/// without a session (or with a null `out`), and `WAV_END_OF_STREAM` once every
/// frame has been delivered.
///
/// # Safety
/// `out` must be null or valid for writes of `wav_block_len()` floats.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wav_get_next_block(out: *mut f32) -> c_int {
	let mut active = session();
	let Some(blocks) = active.as_mut() else {
		return WAV_NOT_INITIALIZED;
	};

	if out.is_null() {
		tracing::error!("wav_get_next_block: null output buffer");
		return WAV_NOT_INITIALIZED;
	}

	// SAFETY: non-null, and the caller guarantees room for a full block.
	let out = unsafe { std::slice::from_raw_parts_mut(out, blocks.block_len()) };
	match blocks.read_block(out) {
		Some(_) => WAV_OK,
		None => WAV_END_OF_STREAM,
	}
}

/// Floats written per block by the active session, or 0 without one.
#[unsafe(no_mangle)]
pub extern "C" fn wav_block_len() -> c_int {
	session().as_ref().map_or(0, |blocks| c_int::try_from(blocks.block_len()).unwrap_or(c_int::MAX))
}

/// Ends the active session and releases the file.
#[unsafe(no_mangle)]
pub extern "C" fn wav_release() {
	*session() = None;
}
