use crate::container::{ReaderOptions, WavReader};
use crate::core::{Result, WavError};
use crate::io::{LoadMode, MediaSource};
use crate::show::{BlockStats, Show, ShowOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Totals for one decoded file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecodeSummary {
	pub blocks: usize,
	pub frames: usize,
	pub peak: f32,
}

pub struct Pipeline {
	input_path: String,
	output_path: Option<String>,
	options: ReaderOptions,
	mode: LoadMode,
}

impl Pipeline {
	pub fn new(
		input_path: String,
		output_path: Option<String>,
		options: ReaderOptions,
		mode: LoadMode,
	) -> Self {
		Self { input_path, output_path, options, mode }
	}

	pub fn run(&self) -> Result<DecodeSummary> {
		let reader = WavReader::open_with(&self.input_path, self.options, self.mode)?;

		match &self.output_path {
			Some(output_path) => self.run_export(&reader, output_path),
			None => self.run_print(&reader),
		}
	}

	fn run_print(&self, reader: &WavReader<MediaSource>) -> Result<DecodeSummary> {
		let channels = reader.format().channels as usize;
		let mut blocks = reader.blocks();
		let mut summary = DecodeSummary::default();

		loop {
			let frames = blocks.remaining_frames().min(blocks.block_size());
			let Some(block) = blocks.next_block() else {
				break;
			};

			let stats = BlockStats::measure(&block[..frames * channels]);
			println!(
				"Block {}: frames={}, peak={:.6}, rms={:.6}",
				summary.blocks, frames, stats.peak, stats.rms
			);

			summary.add(frames, stats.peak);
		}

		Ok(summary)
	}

	fn run_export(&self, reader: &WavReader<MediaSource>, output_path: &str) -> Result<DecodeSummary> {
		let channels = reader.format().channels as usize;
		let mut writer = BufWriter::new(File::create(output_path)?);
		let mut blocks = reader.blocks();
		let mut summary = DecodeSummary::default();

		loop {
			let frames = blocks.remaining_frames().min(blocks.block_size());
			let Some(block) = blocks.next_block() else {
				break;
			};

			// padding past the last frame is not part of the stream
			let samples = &block[..frames * channels];
			for sample in samples {
				writer.write_all(&sample.to_le_bytes())?;
			}

			summary.add(frames, BlockStats::measure(samples).peak);
		}

		writer.flush()?;
		tracing::info!("{}: wrote {} frames to {}", self.input_path, summary.frames, output_path);
		Ok(summary)
	}
}

impl DecodeSummary {
	fn add(&mut self, frames: usize, peak: f32) {
		self.blocks += 1;
		self.frames += frames;
		self.peak = self.peak.max(peak);
	}
}

pub struct BatchPipeline {
	input_pattern: String,
	output_dir: Option<String>,
	show: Option<ShowOptions>,
	options: ReaderOptions,
	mode: LoadMode,
}

impl BatchPipeline {
	pub fn new(
		input_pattern: String,
		output_dir: Option<String>,
		show: Option<ShowOptions>,
		options: ReaderOptions,
		mode: LoadMode,
	) -> Self {
		Self { input_pattern, output_dir, show, options, mode }
	}

	pub fn run(&self) -> Result<()> {
		let files = self.expand_glob()?;

		if files.is_empty() {
			return Err(WavError::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("no files matching pattern: {}", self.input_pattern),
			)));
		}

		if let Some(dir) = &self.output_dir {
			std::fs::create_dir_all(dir)?;
		}

		for input_path in files {
			println!("Processing: {}", input_path);

			if let Some(opts) = &self.show {
				Show::new(input_path.clone(), opts.clone(), self.options, self.mode).run()?;
				continue;
			}

			let output_path = self.output_dir.as_ref().map(|dir| output_file_for(&input_path, dir));
			let pipeline = Pipeline::new(input_path.clone(), output_path.clone(), self.options, self.mode);
			let summary = pipeline.run()?;

			match output_path {
				Some(out) => println!("  -> {} ({} frames)", out, summary.frames),
				None => println!("  {} blocks, {} frames, peak {:.6}", summary.blocks, summary.frames, summary.peak),
			}
		}

		Ok(())
	}

	fn expand_glob(&self) -> Result<Vec<String>> {
		let mut files = Vec::new();

		if !is_batch_pattern(&self.input_pattern) {
			files.push(self.input_pattern.clone());
			return Ok(files);
		}

		let entries = glob::glob(&self.input_pattern).map_err(|e| {
			std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid glob pattern: {}", e))
		})?;

		for entry in entries {
			match entry {
				Ok(path) => {
					if path.is_file() {
						files.push(path.to_string_lossy().to_string());
					}
				}
				Err(e) => {
					tracing::warn!("failed to read entry: {}", e);
				}
			}
		}

		files.sort();
		Ok(files)
	}
}

/// `<dir>/<input stem>.f32`
pub fn output_file_for(input_path: &str, dir: &str) -> String {
	let stem = Path::new(input_path).file_stem().and_then(|n| n.to_str()).unwrap_or("output");
	format!("{}/{}.f32", dir, stem)
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*') || input.contains('?') || input.contains('[')
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}
