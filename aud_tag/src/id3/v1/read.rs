use super::LegacyFrame;
use super::constants::{GENRES, ID3V1_TAG_MARKER, UNKNOWN_GENRE};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::FrameId;
use crate::macros::err;
use crate::tag::{Frame, Tag, TagFlags};
use crate::util::text::latin1_decode;

/// Decode the ID3v1 tag in the last 128 bytes of `buffer`
///
/// # Errors
///
/// * `buffer` is shorter than 128 bytes
/// * The trailer does not start with the "TAG" marker
///
/// # Examples
///
/// ```rust
/// use aud_tag::config::ParseOptions;
/// use aud_tag::id3::v1::parse_id3v1;
///
/// # fn main() -> aud_tag::error::Result<()> {
/// let mut buffer = vec![0u8; 128];
/// buffer[..3].copy_from_slice(b"TAG");
/// buffer[3..7].copy_from_slice(b"Home");
///
/// let tag = parse_id3v1(&buffer, ParseOptions::new())?;
/// assert_eq!(tag.title(), Some("Home"));
/// # Ok(()) }
/// ```
pub fn parse_id3v1(buffer: &[u8], parse_options: ParseOptions) -> Result<Tag> {
	log::debug!("Parsing ID3v1 tag");

	if buffer.len() < 128 {
		err!(InvalidInput("ID3v1 requires at least 128 bytes"));
	}

	let tag = &buffer[buffer.len() - 128..];

	if tag[..3] != ID3V1_TAG_MARKER {
		err!(FakeTag);
	}

	let mut frames = Vec::with_capacity(7);

	frames.push(legacy_frame(FrameId::TITLE, &tag[3..33]));
	frames.push(legacy_frame(FrameId::ARTIST, &tag[33..63]));
	frames.push(legacy_frame(FrameId::ALBUM, &tag[63..93]));
	frames.push(legacy_frame(FrameId::YEAR, &tag[93..97]));

	// A zero at comment byte 29 makes the following byte a track number and
	// shrinks the comment to 28 bytes (ID3v1.1)
	let mut comment_length = 30;
	let mut revision = 0;
	if tag[126] == 0 {
		frames.push(Frame::Legacy(LegacyFrame::new(
			FrameId::TRACK,
			tag[127].to_string(),
		)));
		comment_length = 28;
		revision = 1;
	}

	frames.push(legacy_frame(FrameId::COMMENT, &tag[97..97 + comment_length]));

	if parse_options.skip_empty_frames {
		frames.retain(|frame| !frame.is_empty());
	}

	// The genre frame is appended after the empty-frame filter has run, so it
	// is kept even when its payload is empty
	let genre = GENRES
		.get(usize::from(tag[127]))
		.copied()
		.unwrap_or(UNKNOWN_GENRE);
	frames.push(Frame::Legacy(LegacyFrame::new(
		FrameId::GENRE,
		genre.to_string(),
	)));

	Ok(Tag::new(
		format!("1.{revision}.0"),
		TagFlags::default(),
		frames,
	))
}

// Trailer fields are null padded, with junk sometimes hiding between the nulls.
// Every null byte is removed, not just the tail.
fn legacy_frame(id: FrameId, field: &[u8]) -> Frame {
	let stripped = field
		.iter()
		.copied()
		.filter(|&b| b != 0)
		.collect::<Vec<u8>>();

	Frame::Legacy(LegacyFrame::new(id, latin1_decode(&stripped)))
}
