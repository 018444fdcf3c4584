//! Text decoding for tag content
//!
//! ID3v2 frames mark their content with a single encoding byte. This decoder
//! collapses the marker space into two encodings: `0x00` is Latin-1, anything
//! else is UTF-16. See [`TextEncoding::from_marker`].

/// The text encoding of a frame's textual content
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TextEncoding {
	/// ISO-8859-1, one byte per character
	Latin1,
	/// UTF-16, decoded according to its byte order mark when one is present
	Utf16,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a frame's encoding byte
	///
	/// `0x00` selects [`TextEncoding::Latin1`]; every other value selects
	/// [`TextEncoding::Utf16`]. The markers for UTF-16 BE and UTF-16 with a
	/// byte order mark are not told apart.
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_marker(0x00), TextEncoding::Latin1);
	/// assert_eq!(TextEncoding::from_marker(0x01), TextEncoding::Utf16);
	/// assert_eq!(TextEncoding::from_marker(0x02), TextEncoding::Utf16);
	/// ```
	pub fn from_marker(byte: u8) -> Self {
		if byte == 0x00 { Self::Latin1 } else { Self::Utf16 }
	}
}

/// Decode `bytes` with `encoding`
///
/// No terminator handling happens here; callers slice the field first.
pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> String {
	match encoding {
		TextEncoding::Latin1 => latin1_decode(bytes),
		TextEncoding::Utf16 => match bytes {
			[0xFF, 0xFE, rest @ ..] => utf16_decode_bytes(rest, u16::from_le_bytes),
			[0xFE, 0xFF, rest @ ..] => utf16_decode_bytes(rest, u16::from_be_bytes),
			// No byte order mark, assume little endian
			_ => utf16_decode_bytes(bytes, u16::from_le_bytes),
		},
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| *c as char).collect::<String>()
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
	if bytes.is_empty() {
		return String::new();
	}

	if bytes.len() % 2 != 0 {
		log::warn!("UTF-16 text field has an odd length, dropping the trailing byte");
	}

	let units: Vec<u16> = bytes
		.chunks_exact(2)
		// It is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible to encounter multiple BOMs in a single
		// string. We must filter them out.
		.filter_map(|c| match c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			_ => Some(endianness(c.try_into().unwrap())), // Infallible
		})
		.collect();

	String::from_utf16_lossy(&units)
}

/// Find the first `0x00` byte in `data` at or after `from`
pub(crate) fn find_null(data: &[u8], from: usize) -> Option<usize> {
	if from >= data.len() {
		return None;
	}

	data[from..].iter().position(|&b| b == 0).map(|pos| pos + from)
}

#[cfg(test)]
mod tests {
	use super::{TextEncoding, decode_text, find_null, latin1_decode, utf16_decode_bytes};

	#[test]
	fn latin1_maps_high_bytes() {
		assert_eq!(latin1_decode(b"caf\xE9"), "caf\u{e9}");
	}

	#[test]
	fn latin1_keeps_embedded_nulls() {
		assert_eq!(latin1_decode(b"a\x00b"), "a\u{0}b");
	}

	#[test]
	fn utf16_le_bom() {
		let bytes = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
		assert_eq!(decode_text(&bytes, TextEncoding::Utf16), "hi");
	}

	#[test]
	fn utf16_be_bom() {
		let bytes = [0xFE, 0xFF, 0x00, b'h', 0x00, b'i'];
		assert_eq!(decode_text(&bytes, TextEncoding::Utf16), "hi");
	}

	#[test]
	fn utf16_without_bom_is_little_endian() {
		let bytes = [b'h', 0x00, b'i', 0x00];
		assert_eq!(decode_text(&bytes, TextEncoding::Utf16), "hi");
	}

	#[test]
	fn utf16_odd_length_drops_trailing_byte() {
		let bytes = [b'h', 0x00, b'i', 0x00, b'!'];
		assert_eq!(utf16_decode_bytes(&bytes, u16::from_le_bytes), "hi");
	}

	#[test]
	fn find_null_bounds() {
		let data = [1, 2, 0, 4, 0];
		assert_eq!(find_null(&data, 0), Some(2));
		assert_eq!(find_null(&data, 3), Some(4));
		assert_eq!(find_null(&data, 5), None);
		assert_eq!(find_null(&[], 0), None);
	}

	#[test]
	fn find_null_none_when_absent() {
		assert_eq!(find_null(b"abc", 0), None);
	}
}
