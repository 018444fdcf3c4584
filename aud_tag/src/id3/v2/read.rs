use super::frame::FrameKind;
use super::header::Id3v2Header;
use super::items::{CommentFrame, PictureFrame, PrivateFrame, TextFrame, UrlFrame};
use super::{FrameFlags, FrameHeader};
use crate::config::ParseOptions;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::FrameId;
use crate::macros::parse_mode_choice;
use crate::tag::{Frame, Tag};

use byteorder::{BigEndian, ByteOrder};

/// Decode the ID3v2 tag at the start of `buffer`
///
/// The buffer is expected to hold at least the tag's declared size; whatever
/// audio data follows it is ignored. A declared size running past the buffer
/// is clamped before the frame loop starts, so iteration always terminates.
///
/// # Errors
///
/// * `buffer` is shorter than the 10 byte header
/// * The buffer does not start with the "ID3" marker
/// * With [`ParsingMode::Strict`](crate::config::ParsingMode::Strict): a frame
///   header or frame content is truncated
///
/// # Examples
///
/// ```rust
/// use aud_tag::config::ParseOptions;
/// use aud_tag::id3::v2::parse_id3v2;
///
/// # fn main() -> aud_tag::error::Result<()> {
/// let mut buffer = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, 0x00, 0x32];
/// buffer.extend_from_slice(b"TIT2");
/// buffer.extend_from_slice(&6u32.to_be_bytes());
/// buffer.extend_from_slice(&[0, 0]);
/// buffer.extend_from_slice(b"\x00Test\x00");
///
/// let tag = parse_id3v2(&buffer, ParseOptions::new())?;
/// assert_eq!(tag.version(), "2.3.0");
/// assert_eq!(tag.title(), Some("Test"));
/// # Ok(()) }
/// ```
pub fn parse_id3v2(buffer: &[u8], parse_options: ParseOptions) -> Result<Tag> {
	let header = Id3v2Header::parse(buffer)?;

	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: 2.{}.{}",
		header.size,
		header.major,
		header.revision
	);

	let parse_mode = parse_options.parsing_mode;

	// A size field pointing past the buffer must not keep the loop alive
	let end = std::cmp::min(header.size as usize, buffer.len());

	let mut frames = Vec::new();
	let mut offset = 10_usize;

	while offset < end {
		let Some(header_bytes) = buffer.get(offset..offset + 10) else {
			let remainder = &buffer[offset..];
			if remainder.iter().all(|&b| b == 0) {
				log::debug!("Reached the tag padding");
				break;
			}

			parse_mode_choice!(
				parse_mode,
				STRICT: return Err(Id3v2Error::new(Id3v2ErrorKind::TruncatedFrameHeader).into()),
				DEFAULT: {
					log::warn!("Tag data ends inside a frame header, stopping");
					break;
				}
			)
		};

		// All-zero bytes mean the padding has been reached
		if header_bytes[..4] == [0, 0, 0, 0] {
			log::debug!("Reached the tag padding");
			break;
		}

		let mut id = [0_u8; 4];
		id.copy_from_slice(&header_bytes[..4]);
		let frame_size = BigEndian::read_u32(&header_bytes[4..8]) as usize;
		let flags = FrameFlags::new(header_bytes[8], header_bytes[9]);

		let content_start = offset + 10;
		// The cursor advances by the declared size no matter what happens to
		// this frame, keeping the ones after it aligned
		offset = content_start + frame_size;

		let Some(kind) = FrameKind::from_id(&id) else {
			log::trace!("Skipping unrecognized frame ID: {}", FrameId::from_bytes(id));
			continue;
		};

		let mut frame_header = FrameHeader::new(FrameId::from_bytes(id), flags);

		let content = match buffer.get(content_start..content_start + frame_size) {
			Some(content) => content,
			None => parse_mode_choice!(
				parse_mode,
				STRICT: return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into()),
				RELAXED: {
					log::warn!(
						"Frame {} runs past the end of the buffer, dropping it",
						frame_header.id()
					);
					continue;
				},
				DEFAULT: {
					log::warn!(
						"Frame {} runs past the end of the buffer, truncating it",
						frame_header.id()
					);
					frame_header.mark_degraded();
					&buffer[content_start..]
				}
			),
		};

		let frame = match kind {
			FrameKind::Text => Frame::Text(TextFrame::parse(content, frame_header)),
			FrameKind::Url => Frame::Url(UrlFrame::parse(content, frame_header)),
			FrameKind::Comment => Frame::Comment(CommentFrame::parse(content, frame_header)),
			FrameKind::Picture => Frame::Picture(PictureFrame::parse(content, frame_header)),
			FrameKind::Private => Frame::Private(PrivateFrame::parse(content, frame_header)),
		};

		if parse_options.skip_empty_frames && frame.is_empty() {
			log::trace!("Skipping empty frame with ID {}", frame.id());
			continue;
		}

		frames.push(frame);
	}

	Ok(Tag::new(
		format!("2.{}.{}", header.major, header.revision),
		header.flags,
		frames,
	))
}

#[cfg(test)]
mod tests {
	use super::parse_id3v2;
	use crate::config::{ParseOptions, ParsingMode};
	use crate::tag::Frame;

	// The inverse of the header size repacking, good for sizes below 0o10000
	fn encode_size(size: usize) -> [u8; 2] {
		assert!(size < 0o10000);
		[
			(((size >> 9) & 0x7) << 4 | ((size >> 6) & 0x7)) as u8,
			(((size >> 3) & 0x7) << 4 | (size & 0x7)) as u8,
		]
	}

	fn tag_buffer(frames: &[(&[u8; 4], &[u8])], padding: usize) -> Vec<u8> {
		let content_len: usize = frames.iter().map(|(_, content)| 10 + content.len()).sum();
		let size = encode_size(10 + content_len + padding);

		let mut buffer = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, size[0], size[1]];
		for (id, content) in frames {
			buffer.extend_from_slice(*id);
			buffer.extend_from_slice(&(content.len() as u32).to_be_bytes());
			buffer.extend_from_slice(&[0, 0]);
			buffer.extend_from_slice(content);
		}
		buffer.extend(std::iter::repeat_n(0_u8, padding));
		buffer
	}

	#[test_log::test]
	fn multiple_frames() {
		let buffer = tag_buffer(
			&[
				(b"TIT2", b"\x00Test Song\x00"),
				(b"TPE1", b"\x00Test Artist\x00"),
				(b"WOAR", b"\x20https://example.com\x00"),
			],
			24,
		);

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();

		assert_eq!(tag.version(), "2.3.0");
		assert_eq!(tag.frames().len(), 3);
		assert_eq!(tag.title(), Some("Test Song"));
		assert_eq!(tag.artist(), Some("Test Artist"));
		assert!(matches!(&tag.frames()[2], Frame::Url(url) if url.url() == "https://example.com"));
	}

	#[test_log::test]
	fn unknown_frames_keep_the_cursor_aligned() {
		let buffer = tag_buffer(
			&[
				(b"UFID", b"http://example.com\x00\x01\x02"),
				(b"TIT2", b"\x00Still Here\x00"),
			],
			0,
		);

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();

		assert_eq!(tag.frames().len(), 1);
		assert_eq!(tag.title(), Some("Still Here"));
	}

	#[test_log::test]
	fn overlong_frame_is_truncated_and_degraded() {
		let mut buffer = tag_buffer(&[(b"TIT2", b"\x00Cut")], 0);
		// Declare more content than the buffer holds
		let size_field = 14..18;
		buffer[size_field].copy_from_slice(&64_u32.to_be_bytes());

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();

		assert_eq!(tag.frames().len(), 1);
		let Frame::Text(text) = &tag.frames()[0] else {
			panic!("expected a text frame");
		};
		assert!(text.header().is_degraded());
		// The terminator strip still applies to the truncated text
		assert_eq!(text.value, "Cu");
	}

	#[test_log::test]
	fn overlong_frame_is_an_error_under_strict() {
		let mut buffer = tag_buffer(&[(b"TIT2", b"\x00Cut")], 0);
		buffer[14..18].copy_from_slice(&64_u32.to_be_bytes());

		let options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
		assert!(parse_id3v2(&buffer, options).is_err());
	}

	#[test_log::test]
	fn overlong_frame_is_dropped_under_relaxed() {
		let mut buffer = tag_buffer(&[(b"TIT2", b"\x00Cut")], 0);
		buffer[14..18].copy_from_slice(&64_u32.to_be_bytes());

		let options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
		let tag = parse_id3v2(&buffer, options).unwrap();
		assert!(tag.frames().is_empty());
	}

	#[test_log::test]
	fn overlong_frame_resumes_with_its_declared_size() {
		// The cursor moves by the declared size, so the bytes swallowed by the
		// truncated frame are never misread as further frame headers
		let mut buffer = tag_buffer(
			&[(b"TIT2", b"\x00Cut\x00"), (b"TALB", b"\x00Junk\x00")],
			0,
		);
		buffer[14..18].copy_from_slice(&200_u32.to_be_bytes());

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();

		assert_eq!(tag.frames().len(), 1);
		assert!(tag.frames()[0].is_degraded());
	}

	#[test_log::test]
	fn padding_stops_iteration() {
		let mut buffer = tag_buffer(&[(b"TIT2", b"\x00Test\x00")], 40);
		// Smuggle a frame into the padding; it must never be reached
		let after_padding_start = buffer.len() - 10;
		buffer[after_padding_start..after_padding_start + 4].copy_from_slice(b"TALB");

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();
		assert_eq!(tag.frames().len(), 1);
	}

	#[test_log::test]
	fn skip_empty_frames() {
		let buffer = tag_buffer(
			&[
				(b"TIT2", b"\x00\x00"),
				(b"TALB", b"\x00Full\x00"),
				(b"COMM", b"\x00eng\x00\x00"),
			],
			0,
		);

		let tag = parse_id3v2(&buffer, ParseOptions::new().skip_empty_frames(true)).unwrap();

		assert_eq!(tag.frames().len(), 1);
		assert_eq!(tag.album(), Some("Full"));
	}

	#[test_log::test]
	fn declared_size_is_clamped_to_the_buffer() {
		let mut buffer = tag_buffer(&[(b"TIT2", b"\x00Test\x00")], 0);
		let size = encode_size(0o7777);
		buffer[8] = size[0];
		buffer[9] = size[1];

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();
		assert_eq!(tag.title(), Some("Test"));
	}

	#[test_log::test]
	fn header_flags() {
		let mut buffer = tag_buffer(&[], 6);
		buffer[5] = 0b0000_0111;

		let tag = parse_id3v2(&buffer, ParseOptions::new()).unwrap();

		assert!(tag.flags().unsynchronisation);
		assert!(tag.flags().extended_header);
		assert!(tag.flags().experimental);
		assert!(tag.frames().is_empty());
	}
}
