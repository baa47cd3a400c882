use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
	/// Map the file read-only into memory.
	#[default]
	Mapped,
	/// Read the whole file into an owned buffer.
	Read,
}

/// A whole container resident in memory, either mapped or read.
#[derive(Debug)]
pub enum MediaSource {
	Mapped(Mmap),
	Owned(Vec<u8>),
}

impl MediaSource {
	pub fn open<P: AsRef<Path>>(path: P, mode: LoadMode) -> std::io::Result<Self> {
		let path = path.as_ref();

		match mode {
			LoadMode::Read => Ok(MediaSource::Owned(std::fs::read(path)?)),
			LoadMode::Mapped => {
				let file = File::open(path)?;
				// zero-length maps are rejected on some platforms
				if file.metadata()?.len() == 0 {
					return Ok(MediaSource::Owned(Vec::new()));
				}
				// SAFETY: the map is read-only; the file must not be truncated while mapped.
				let map = unsafe { MmapOptions::new().map(&file)? };
				Ok(MediaSource::Mapped(map))
			}
		}
	}

	pub fn len(&self) -> usize {
		self.as_ref().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_mapped(&self) -> bool {
		matches!(self, MediaSource::Mapped(_))
	}
}

impl AsRef<[u8]> for MediaSource {
	fn as_ref(&self) -> &[u8] {
		match self {
			MediaSource::Mapped(map) => &map[..],
			MediaSource::Owned(bytes) => bytes.as_slice(),
		}
	}
}

impl From<Vec<u8>> for MediaSource {
	fn from(bytes: Vec<u8>) -> Self {
		MediaSource::Owned(bytes)
	}
}
