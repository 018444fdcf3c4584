use crate::id3::FrameId;
use crate::id3::v2::FrameHeader;
use crate::util::text::{TextEncoding, decode_text, find_null};

/// An ID3v2 attached picture frame
///
/// The image bytes are carried as read, tagged with the MIME type string the
/// frame declares. Decoding the image is the caller's business.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PictureFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The MIME type of the image data
	pub mime_type: String,
	/// The picture type code (front cover, back cover, ...)
	pub picture_type: u8,
	/// A description of the image
	pub description: String,
	/// The raw image bytes
	pub data: Vec<u8>,
}

impl PictureFrame {
	/// NOTE: This expects *only* the frame content, the header has already
	/// been consumed
	pub(crate) fn parse(content: &[u8], mut header: FrameHeader) -> Self {
		let mut encoding = TextEncoding::Latin1;
		let mut mime_type = String::new();
		let mut picture_type = 0;
		let mut description = String::new();
		let mut data = Vec::new();

		'parse: {
			let Some(&encoding_byte) = content.first() else {
				log::warn!("Picture frame has no content");
				header.mark_degraded();
				break 'parse;
			};
			encoding = TextEncoding::from_marker(encoding_byte);

			let Some(mime_end) = find_null(content, 1) else {
				log::warn!("Picture MIME type is not null terminated, taking it whole");
				header.mark_degraded();
				mime_type = decode_text(content.get(1..).unwrap_or_default(), encoding);
				break 'parse;
			};
			mime_type = decode_text(&content[1..mime_end], encoding);

			let Some(&type_byte) = content.get(mime_end + 1) else {
				log::warn!("Picture frame ends before its picture type");
				header.mark_degraded();
				break 'parse;
			};
			picture_type = type_byte;

			let description_start = mime_end + 2;
			let Some(description_end) = find_null(content, description_start) else {
				log::warn!("Picture description is not null terminated, taking it whole");
				header.mark_degraded();
				description =
					decode_text(content.get(description_start..).unwrap_or_default(), encoding);
				break 'parse;
			};
			description = decode_text(&content[description_start..description_end], encoding);

			data = content[description_end + 1..].to_vec();
		}

		Self {
			header,
			encoding,
			mime_type,
			picture_type,
			description,
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

	/// Whether the frame carries any image bytes
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::PictureFrame;
	use crate::id3::FrameId;
	use crate::id3::v2::{FrameFlags, FrameHeader};
	use crate::util::text::TextEncoding;

	fn header() -> FrameHeader {
		FrameHeader::new(FrameId::PICTURE, FrameFlags::default())
	}

	#[test]
	fn front_cover() {
		let mut content = vec![0x00];
		content.extend_from_slice(b"image/png\x00");
		content.push(0x03); // Front cover
		content.extend_from_slice(b"Cover\x00");
		content.extend_from_slice(&[0x89, b'P', b'N', b'G']);

		let frame = PictureFrame::parse(&content, header());

		assert_eq!(frame.encoding, TextEncoding::Latin1);
		assert_eq!(frame.mime_type, "image/png");
		assert_eq!(frame.picture_type, 3);
		assert_eq!(frame.description, "Cover");
		assert_eq!(frame.data, [0x89, b'P', b'N', b'G']);
		assert!(!frame.header().is_degraded());
	}

	#[test]
	fn empty_description() {
		let mut content = vec![0x00];
		content.extend_from_slice(b"image/jpeg\x00");
		content.push(0x00);
		content.push(0x00); // Empty description
		content.extend_from_slice(&[0xFF, 0xD8]);

		let frame = PictureFrame::parse(&content, header());

		assert_eq!(frame.mime_type, "image/jpeg");
		assert_eq!(frame.description, "");
		assert_eq!(frame.data, [0xFF, 0xD8]);
	}

	#[test]
	fn unterminated_mime_type() {
		let frame = PictureFrame::parse(b"\x00image/png", header());

		assert_eq!(frame.mime_type, "image/png");
		assert!(frame.is_empty());
		assert!(frame.header().is_degraded());
	}

	#[test]
	fn unterminated_description() {
		let mut content = vec![0x00];
		content.extend_from_slice(b"image/png\x00");
		content.push(0x03);
		content.extend_from_slice(b"never terminated");

		let frame = PictureFrame::parse(&content, header());

		assert_eq!(frame.description, "never terminated");
		assert!(frame.is_empty());
		assert!(frame.header().is_degraded());
	}

	#[test]
	fn no_content() {
		let frame = PictureFrame::parse(&[], header());
		assert!(frame.is_empty());
		assert!(frame.header().is_degraded());
	}
}
