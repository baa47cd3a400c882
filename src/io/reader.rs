/// Fixed-width little-endian field extraction at absolute byte offsets.
///
/// Every accessor returns `None` when the field would run past the end of the buffer,
/// so header parsing never depends on in-memory struct layout.
pub trait ReadPrimitives {
	fn bytes_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]>;

	#[inline]
	fn read_u16_le_at(&self, offset: usize) -> Option<u16> {
		self.bytes_at(offset).map(u16::from_le_bytes)
	}

	#[inline]
	fn read_u32_le_at(&self, offset: usize) -> Option<u32> {
		self.bytes_at(offset).map(u32::from_le_bytes)
	}
}

impl ReadPrimitives for [u8] {
	#[inline]
	fn bytes_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
		let end = offset.checked_add(N)?;
		let field = self.get(offset..end)?;
		<[u8; N]>::try_from(field).ok()
	}
}
