mod analyze;
mod human;
mod types;

pub use analyze::analyze_wav;
pub use human::{blocks_table, header_table};
pub use types::{BlockInfo, BlockStats, DataInfo, FileInfo, MediaInfo, ShowOptions, StreamInfo};

use crate::container::{ReaderOptions, WavReader};
use crate::core::Result;
use crate::io::LoadMode;

pub struct Show {
	input_path: String,
	opts: ShowOptions,
	options: ReaderOptions,
	mode: LoadMode,
}

impl Show {
	pub fn new(input_path: String, opts: ShowOptions, options: ReaderOptions, mode: LoadMode) -> Self {
		Self { input_path, opts, options, mode }
	}

	pub fn run(&self) -> Result<()> {
		let info = self.analyze()?;
		human::render(&info);
		Ok(())
	}

	pub fn analyze(&self) -> Result<MediaInfo> {
		let reader = WavReader::open_with(&self.input_path, self.options, self.mode)?;
		Ok(analyze::analyze_wav(&reader, &self.input_path, &self.opts))
	}
}
