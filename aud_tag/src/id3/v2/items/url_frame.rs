use crate::id3::FrameId;
use crate::id3::v2::FrameHeader;
use crate::util::text::{find_null, latin1_decode};

/// An ID3v2 URL link frame
///
/// Covers every "W..." frame ID. URL frames carry no encoding byte; their
/// content is always Latin-1.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UrlFrame {
	pub(crate) header: FrameHeader,
	pub(crate) content: String,
}

impl UrlFrame {
	/// NOTE: This expects *only* the frame content, the header has already
	/// been consumed
	pub(crate) fn parse(content: &[u8], mut header: FrameHeader) -> Self {
		// The URL runs from byte 1 to the first null anywhere in the content;
		// a null at byte 0 leaves nothing
		let url = match find_null(content, 0) {
			Some(0) => String::new(),
			Some(terminator) => latin1_decode(&content[1..terminator]),
			None => {
				if !content.is_empty() {
					log::warn!("URL frame is not null terminated, taking the whole content");
					header.mark_degraded();
				}

				latin1_decode(content.get(1..).unwrap_or_default())
			},
		};

		Self {
			header,
			content: url,
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

	/// Get the URL of the frame
	pub fn url(&self) -> &str {
		&self.content
	}

	/// Whether the frame carries any text
	pub fn is_empty(&self) -> bool {
		self.content.is_empty()
	}
}
