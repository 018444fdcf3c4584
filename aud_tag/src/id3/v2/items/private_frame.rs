use crate::id3::FrameId;
use crate::id3::v2::FrameHeader;
use crate::util::text::{find_null, latin1_decode};

/// An ID3v2 private frame
///
/// This frame is used to contain information from a software producer that
/// its program uses and does not fit into the other frames.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PrivateFrame {
	pub(crate) header: FrameHeader,
	/// An identifier for the organisation responsible for the frame, usually
	/// an email address or URL
	pub owner: String,
	/// The opaque payload, read as Latin-1 text
	pub data: String,
}

impl PrivateFrame {
	/// NOTE: This expects *only* the frame content, the header has already
	/// been consumed
	pub(crate) fn parse(content: &[u8], mut header: FrameHeader) -> Self {
		let owner;
		let data;
		match find_null(content, 0) {
			Some(terminator) => {
				owner = latin1_decode(&content[..terminator]);
				data = latin1_decode(&content[terminator + 1..]);
			},
			None => {
				if !content.is_empty() {
					log::warn!("Private frame owner is not null terminated, taking it whole");
					header.mark_degraded();
				}

				owner = latin1_decode(content);
				data = String::new();
			},
		}

		Self {
			header,
			owner,
			data,
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

	/// Whether the frame carries any payload
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}
