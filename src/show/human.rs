use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Table, row};

use super::types::MediaInfo;

pub fn render(info: &MediaInfo) {
	header_table(info).printstd();

	if !info.blocks.is_empty() {
		println!();
		blocks_table(info).printstd();
	}
}

pub fn header_table(info: &MediaInfo) -> Table {
	let mut table = Table::new();
	table.set_format(*FORMAT_CLEAN);

	let file = &info.file;
	let stream = &info.stream;
	let data = &info.data;

	table.add_row(row!["file", file.path]);
	table.add_row(row!["size", format!("{} bytes ({})", file.size, if file.mapped { "mapped" } else { "read" })]);
	table.add_row(row!["duration", format!("{:.3} s", file.duration)]);
	table.add_row(row!["codec", format!("{} / {}", stream.codec, stream.format_tag)]);
	table.add_row(row!["sample rate", format!("{} Hz", stream.sample_rate)]);
	table.add_row(row!["channels", stream.channels]);
	table.add_row(row!["bits per sample", stream.bits_per_sample]);
	table.add_row(row!["bytes per frame", stream.bytes_per_frame]);
	table.add_row(row!["data offset", data.offset]);

	let declared = if data.truncated {
		format!("{} bytes (truncated)", data.declared_size)
	} else {
		format!("{} bytes", data.declared_size)
	};
	table.add_row(row!["data size", declared]);
	table.add_row(row!["frames", data.frames]);
	table.add_row(row!["samples", data.samples]);
	table.add_row(row!["blocks", format!("{} x {} frames", data.blocks, data.block_size)]);

	table
}

pub fn blocks_table(info: &MediaInfo) -> Table {
	let mut table = Table::new();
	table.set_format(*FORMAT_CLEAN);
	table.set_titles(row!["block", "frames", "peak", "rms"]);

	for block in &info.blocks {
		table.add_row(row![
			block.index,
			block.frames,
			format!("{:.6}", block.stats.peak),
			format!("{:.6}", block.stats.rms)
		]);
	}

	table
}
