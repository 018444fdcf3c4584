use crate::id3::FrameId;
use crate::id3::v2::FrameHeader;
use crate::util::text::{TextEncoding, decode_text, find_null};

/// An ID3v2 comment frame
///
/// Comments carry a language code and a short description alongside the
/// comment text itself.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommentFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and comment text
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The comment text itself
	pub content: String,
}

impl CommentFrame {
	/// NOTE: This expects *only* the frame content, the header has already
	/// been consumed
	pub(crate) fn parse(content: &[u8], mut header: FrameHeader) -> Self {
		if content.len() < 4 {
			log::warn!("Comment frame ends inside the language code");
			header.mark_degraded();

			let encoding = TextEncoding::from_marker(content.first().copied().unwrap_or(0));
			let mut language = [0; 3];
			for (dst, src) in language.iter_mut().zip(content.iter().skip(1)) {
				*dst = *src;
			}

			return Self {
				header,
				encoding,
				language,
				description: String::new(),
				content: String::new(),
			};
		}

		let encoding = TextEncoding::from_marker(content[0]);

		let mut language = [0; 3];
		language.copy_from_slice(&content[1..4]);

		let description;
		let comment;
		match find_null(content, 4) {
			Some(mut terminator) => {
				description = decode_text(&content[4..terminator], encoding);

				// An empty description followed by a second null is a two-byte
				// terminator; step past it before taking the comment
				if description.is_empty() && content.get(terminator + 1) == Some(&0) {
					terminator += 1;
				}

				let mut text = decode_text(&content[terminator + 1..], encoding);
				// The final character is the field terminator, written or not
				text.pop();
				comment = text;
			},
			None => {
				log::warn!("Comment description is not null terminated, taking it whole");
				header.mark_degraded();

				description = decode_text(&content[4..], encoding);
				comment = String::new();
			},
		}

		Self {
			header,
			encoding,
			language,
			description,
			content: comment,
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

	/// Whether the frame carries any comment text
	pub fn is_empty(&self) -> bool {
		self.content.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::CommentFrame;
	use crate::id3::FrameId;
	use crate::id3::v2::{FrameFlags, FrameHeader};
	use crate::util::text::TextEncoding;

	fn header() -> FrameHeader {
		FrameHeader::new(FrameId::COMMENT, FrameFlags::default())
	}

	#[test]
	fn empty_description_with_double_null() {
		let content = [0x00, b'e', b'n', b'g', 0x00, 0x00, b'H', b'i', 0x00];
		let frame = CommentFrame::parse(&content, header());

		assert_eq!(frame.encoding, TextEncoding::Latin1);
		assert_eq!(frame.language, *b"eng");
		assert_eq!(frame.description, "");
		assert_eq!(frame.content, "Hi");
	}

	#[test]
	fn described_comment() {
		let content = b"\x00engliner notes\x00Some context\x00";
		let frame = CommentFrame::parse(content, header());

		assert_eq!(frame.description, "liner notes");
		assert_eq!(frame.content, "Some context");
	}

	#[test]
	fn missing_description_terminator() {
		let content = b"\x00engnever terminated";
		let frame = CommentFrame::parse(content, header());

		assert_eq!(frame.description, "never terminated");
		assert_eq!(frame.content, "");
		assert!(frame.header().is_degraded());
	}

	#[test]
	fn truncated_language_code() {
		let frame = CommentFrame::parse(&[0x00, b'e'], header());

		assert_eq!(frame.language, [b'e', 0, 0]);
		assert!(frame.is_empty());
		assert!(frame.header().is_degraded());
	}
}
