#![allow(dead_code)]

use std::io::Write;

pub const PCM: u16 = 1;
pub const IEEE_FLOAT: u16 = 3;

/// Assembles RIFF/WAVE byte buffers for tests.
#[derive(Debug, Clone)]
pub struct WavBuilder {
	format_code: u16,
	channels: u16,
	sample_rate: u32,
	bits: u16,
	fmt_extra: Vec<u8>,
	before_fmt: Vec<([u8; 4], Vec<u8>)>,
	before_data: Vec<([u8; 4], Vec<u8>)>,
	declared_size: Option<u32>,
	data: Vec<u8>,
}

impl WavBuilder {
	pub fn new(format_code: u16, channels: u16, sample_rate: u32, bits: u16) -> Self {
		Self {
			format_code,
			channels,
			sample_rate,
			bits,
			fmt_extra: Vec::new(),
			before_fmt: Vec::new(),
			before_data: Vec::new(),
			declared_size: None,
			data: Vec::new(),
		}
	}

	pub fn pcm(channels: u16, sample_rate: u32, bits: u16) -> Self {
		Self::new(PCM, channels, sample_rate, bits)
	}

	pub fn float(channels: u16, sample_rate: u32, bits: u16) -> Self {
		Self::new(IEEE_FLOAT, channels, sample_rate, bits)
	}

	pub fn data(mut self, data: Vec<u8>) -> Self {
		self.data = data;
		self
	}

	pub fn declared_size(mut self, size: u32) -> Self {
		self.declared_size = Some(size);
		self
	}

	pub fn fmt_extra(mut self, extra: &[u8]) -> Self {
		self.fmt_extra = extra.to_vec();
		self
	}

	pub fn chunk_before_fmt(mut self, id: &[u8; 4], body: Vec<u8>) -> Self {
		self.before_fmt.push((*id, body));
		self
	}

	pub fn chunk_before_data(mut self, id: &[u8; 4], body: Vec<u8>) -> Self {
		self.before_data.push((*id, body));
		self
	}

	pub fn build(&self) -> Vec<u8> {
		let block_align = self.channels * self.bits / 8;
		let byte_rate = self.sample_rate * block_align as u32;

		let mut fmt = Vec::new();
		fmt.extend_from_slice(&self.format_code.to_le_bytes());
		fmt.extend_from_slice(&self.channels.to_le_bytes());
		fmt.extend_from_slice(&self.sample_rate.to_le_bytes());
		fmt.extend_from_slice(&byte_rate.to_le_bytes());
		fmt.extend_from_slice(&block_align.to_le_bytes());
		fmt.extend_from_slice(&self.bits.to_le_bytes());
		fmt.extend_from_slice(&self.fmt_extra);

		let mut body = Vec::new();
		body.extend_from_slice(b"WAVE");
		for (id, chunk) in &self.before_fmt {
			push_chunk(&mut body, id, chunk);
		}
		push_chunk(&mut body, b"fmt ", &fmt);
		for (id, chunk) in &self.before_data {
			push_chunk(&mut body, id, chunk);
		}

		let declared = self.declared_size.unwrap_or(self.data.len() as u32);
		body.extend_from_slice(b"data");
		body.extend_from_slice(&declared.to_le_bytes());
		body.extend_from_slice(&self.data);

		let mut wav = Vec::with_capacity(body.len() + 8);
		wav.extend_from_slice(b"RIFF");
		wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
		wav.extend_from_slice(&body);
		wav
	}
}

fn push_chunk(out: &mut Vec<u8>, id: &[u8; 4], body: &[u8]) {
	out.extend_from_slice(id);
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
}

pub fn i16_bytes(samples: &[i16]) -> Vec<u8> {
	samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

pub fn f32_bytes(samples: &[f32]) -> Vec<u8> {
	samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

pub fn f64_bytes(samples: &[f64]) -> Vec<u8> {
	samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Nonzero 16-bit ramp, so stale values in a reused buffer are detectable.
pub fn ramp_i16(count: usize) -> Vec<i16> {
	(0..count).map(|i| 1000 + (i % 100) as i16).collect()
}

/// Mono 16-bit PCM at 44100 Hz holding `ramp_i16(frames)`.
pub fn mono16_wav(frames: usize) -> Vec<u8> {
	WavBuilder::pcm(1, 44100, 16).data(i16_bytes(&ramp_i16(frames))).build()
}

pub fn write_temp_wav(bytes: &[u8]) -> tempfile::NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
	file.write_all(bytes).unwrap();
	file.flush().unwrap();
	file
}
