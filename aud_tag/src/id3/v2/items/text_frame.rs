use crate::id3::FrameId;
use crate::id3::v2::FrameHeader;
use crate::util::text::{TextEncoding, decode_text};

/// An ID3v2 text information frame
///
/// Covers every "T..." frame ID; the ID is kept so `TIT2`, `TPE1`, `TXXX`
/// and friends can be told apart by the caller.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	pub value: String,
}

impl TextFrame {
	/// NOTE: This expects *only* the frame content, the header has already
	/// been consumed
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Self {
		if content.is_empty() {
			return Self {
				header,
				encoding: TextEncoding::Latin1,
				value: String::new(),
			};
		}

		let encoding = TextEncoding::from_marker(content[0]);
		let mut value = decode_text(&content[1..], encoding);
		// The final character is the field terminator, written or not
		value.pop();

		Self {
			header,
			encoding,
			value,
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &FrameId {
		&self.header.id
	}

	/// Get the header for the frame
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Whether the frame carries any text
	pub fn is_empty(&self) -> bool {
		self.value.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::TextFrame;
	use crate::id3::FrameId;
	use crate::id3::v2::{FrameFlags, FrameHeader};
	use crate::util::text::TextEncoding;

	fn header() -> FrameHeader {
		FrameHeader::new(FrameId::TITLE, FrameFlags::default())
	}

	#[test]
	fn latin1_terminated() {
		let frame = TextFrame::parse(b"\x00Test Song\x00", header());

		assert_eq!(frame.encoding, TextEncoding::Latin1);
		assert_eq!(frame.value, "Test Song");
	}

	#[test]
	fn unterminated_text_loses_its_last_character() {
		let frame = TextFrame::parse(b"\x00Test Song", header());
		assert_eq!(frame.value, "Test Son");
	}

	#[test]
	fn utf16_with_byte_order_mark() {
		let mut content = vec![0x01, 0xFF, 0xFE];
		for unit in "Träume".encode_utf16() {
			content.extend_from_slice(&unit.to_le_bytes());
		}
		content.extend_from_slice(&[0x00, 0x00]);

		let frame = TextFrame::parse(&content, header());

		assert_eq!(frame.encoding, TextEncoding::Utf16);
		assert_eq!(frame.value, "Träume");
	}

	#[test]
	fn empty_content() {
		let frame = TextFrame::parse(&[], header());
		assert!(frame.is_empty());
	}

	#[test]
	fn encoding_byte_only() {
		let frame = TextFrame::parse(&[0x00], header());
		assert!(frame.is_empty());
	}
}
