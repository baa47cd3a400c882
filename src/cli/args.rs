use crate::container::ReaderOptions;
use crate::container::wav::DEFAULT_BLOCK_SIZE;
use crate::io::LoadMode;
use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "wavblocks")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input file or glob pattern")]
	pub input: String,

	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Write decoded samples as raw f32le (file, or directory for globs)"
	)]
	pub output: Option<String>,

	#[arg(
		short,
		long = "block-size",
		value_name = "FRAMES",
		default_value_t = DEFAULT_BLOCK_SIZE,
		value_parser = clap::value_parser!(usize),
		help = "Frames per decoded block"
	)]
	pub block_size: usize,

	#[arg(long, help = "Read the file into memory instead of mapping it")]
	pub no_mmap: bool,

	#[arg(long, help = "Show format information and block statistics")]
	pub show: bool,

	#[arg(long, value_name = "N", default_value_t = 8, help = "Blocks listed by --show")]
	pub blocks: usize,

	#[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
	pub verbose: u8,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	pub fn reader_options(&self) -> ReaderOptions {
		ReaderOptions::default().with_block_size(self.block_size)
	}

	pub fn load_mode(&self) -> LoadMode {
		if self.no_mmap { LoadMode::Read } else { LoadMode::Mapped }
	}

	pub fn log_level(&self) -> LevelFilter {
		match self.verbose {
			0 => LevelFilter::WARN,
			1 => LevelFilter::INFO,
			2 => LevelFilter::DEBUG,
			_ => LevelFilter::TRACE,
		}
	}
}
