use crate::container::WavReader;
use crate::io::MediaSource;

use super::types::{BlockInfo, BlockStats, DataInfo, FileInfo, MediaInfo, ShowOptions, StreamInfo};

pub fn analyze_wav(reader: &WavReader<MediaSource>, path: &str, opts: &ShowOptions) -> MediaInfo {
	let file = FileInfo {
		path: path.to_string(),
		size: reader.source().len(),
		mapped: reader.source().is_mapped(),
		duration: reader.duration(),
	};

	MediaInfo {
		file,
		stream: build_stream(reader),
		data: build_data(reader),
		blocks: collect_blocks(reader, opts),
	}
}

fn build_stream<S: AsRef<[u8]>>(reader: &WavReader<S>) -> StreamInfo {
	let format = reader.format();

	StreamInfo {
		codec: format.codec_name(),
		format_tag: format!("{} ({})", format.format_tag, format.format_tag.code()),
		sample_rate: format.sample_rate,
		channels: format.channels,
		bits_per_sample: format.bits_per_sample,
		bytes_per_frame: format.bytes_per_frame(),
	}
}

fn build_data<S: AsRef<[u8]>>(reader: &WavReader<S>) -> DataInfo {
	let data = reader.data();

	DataInfo {
		offset: data.offset,
		declared_size: data.declared_size,
		truncated: data.is_truncated(reader.bytes().len()),
		frames: reader.num_frames(),
		samples: reader.num_samples(),
		block_size: reader.block_size(),
		blocks: reader.num_blocks(),
	}
}

fn collect_blocks<S: AsRef<[u8]>>(reader: &WavReader<S>, opts: &ShowOptions) -> Vec<BlockInfo> {
	let channels = reader.format().channels as usize;
	let mut blocks = reader.blocks();
	let mut infos = Vec::new();

	while infos.len() < opts.block_limit {
		let frames = blocks.remaining_frames().min(blocks.block_size());
		let Some(block) = blocks.next_block() else {
			break;
		};

		let stats = BlockStats::measure(&block[..frames * channels]);
		infos.push(BlockInfo { index: infos.len(), frames, stats });
	}

	infos
}
