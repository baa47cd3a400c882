mod common;

use common::{mono16_wav, write_temp_wav};
use std::ffi::CString;
use wavblocks::ffi::{
	WAV_END_OF_STREAM, WAV_INIT_FAILED, WAV_NOT_INITIALIZED, WAV_OK, wav_block_len, wav_get_next_block,
	wav_initialize, wav_release,
};

// The boundary keeps one global session, so the whole lifecycle runs in one test.
#[test]
fn test_session_lifecycle() {
	let file = write_temp_wav(&mono16_wav(1500));
	let path = CString::new(file.path().to_string_lossy().as_bytes()).unwrap();
	let mut out = vec![9.0f32; 1024];

	wav_release();
	assert_eq!(wav_block_len(), 0);
	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_NOT_INITIALIZED);

	assert_eq!(unsafe { wav_initialize(path.as_ptr(), 1024) }, WAV_OK);
	assert_eq!(wav_block_len(), 1024);
	assert_eq!(unsafe { wav_get_next_block(std::ptr::null_mut()) }, WAV_NOT_INITIALIZED);

	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_OK);
	assert_eq!(out[0], 1000.0 / 32768.0);

	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_OK);
	assert!(out[476..].iter().all(|&s| s == 0.0));

	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_END_OF_STREAM);
	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_END_OF_STREAM);

	// re-initializing starts a fresh pass
	assert_eq!(unsafe { wav_initialize(path.as_ptr(), 512) }, WAV_OK);
	assert_eq!(wav_block_len(), 512);
	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_OK);

	wav_release();
	assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_NOT_INITIALIZED);

	// a failed initialize drops any previous session
	let missing = CString::new("/nonexistent/dir/missing.wav").unwrap();
	for (candidate, block_size) in [(path.as_ptr(), 0), (path.as_ptr(), -5), (path.as_ptr(), i32::MAX), (missing.as_ptr(), 1024), (std::ptr::null(), 1024)] {
		assert_eq!(unsafe { wav_initialize(path.as_ptr(), 256) }, WAV_OK);
		assert_eq!(unsafe { wav_initialize(candidate, block_size) }, WAV_INIT_FAILED);
		assert_eq!(wav_block_len(), 0);
		assert_eq!(unsafe { wav_get_next_block(out.as_mut_ptr()) }, WAV_NOT_INITIALIZED);
	}
}
