/// Returns the offset of the first occurrence of `tag` in `haystack`.
///
/// Only start positions in `[0, max - tag.len())` are considered, where `max` is
/// `max_search_bytes` clamped to the buffer length. This keeps a missing tag from
/// dragging the search through a large sample payload.
pub fn find_tag(haystack: &[u8], tag: &[u8], max_search_bytes: Option<usize>) -> Option<usize> {
	find_tag_from(haystack, tag, 0, max_search_bytes)
}

/// Same as [`find_tag`], starting at the absolute offset `start`.
///
/// The limit stays absolute: a tag is found only if it starts in
/// `[start, max - tag.len())`.
pub fn find_tag_from(
	haystack: &[u8],
	tag: &[u8],
	start: usize,
	max_search_bytes: Option<usize>,
) -> Option<usize> {
	if tag.is_empty() {
		return None;
	}

	let max = max_search_bytes.unwrap_or(haystack.len()).min(haystack.len());
	let end = max.checked_sub(tag.len())?;
	if start >= end {
		return None;
	}

	haystack[start..max]
		.windows(tag.len())
		.take(end - start)
		.position(|window| window == tag)
		.map(|index| start + index)
}
