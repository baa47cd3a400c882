#[derive(Debug, Clone)]
pub struct ShowOptions {
	/// Number of leading blocks to measure and list.
	pub block_limit: usize,
}

impl Default for ShowOptions {
	fn default() -> Self {
		Self { block_limit: 8 }
	}
}

#[derive(Debug, Clone)]
pub struct FileInfo {
	pub path: String,
	pub size: usize,
	pub mapped: bool,
	pub duration: f64,
}

#[derive(Debug, Clone)]
pub struct StreamInfo {
	pub codec: String,
	pub format_tag: String,
	pub sample_rate: u32,
	pub channels: u16,
	pub bits_per_sample: u16,
	pub bytes_per_frame: usize,
}

#[derive(Debug, Clone)]
pub struct DataInfo {
	pub offset: usize,
	pub declared_size: u32,
	pub truncated: bool,
	pub frames: usize,
	pub samples: usize,
	pub block_size: usize,
	pub blocks: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct BlockInfo {
	pub index: usize,
	pub frames: usize,
	pub stats: BlockStats,
}

#[derive(Debug, Clone)]
pub struct MediaInfo {
	pub file: FileInfo,
	pub stream: StreamInfo,
	pub data: DataInfo,
	pub blocks: Vec<BlockInfo>,
}

/// Peak and RMS level of a run of normalized samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockStats {
	pub peak: f32,
	pub rms: f32,
}

impl BlockStats {
	pub fn measure(samples: &[f32]) -> Self {
		if samples.is_empty() {
			return Self::default();
		}

		let mut peak = 0.0f32;
		let mut sum_sq = 0.0f64;
		for &s in samples {
			peak = peak.max(s.abs());
			sum_sq += (s as f64) * (s as f64);
		}

		let rms = (sum_sq / samples.len() as f64).sqrt() as f32;
		Self { peak, rms }
	}
}
