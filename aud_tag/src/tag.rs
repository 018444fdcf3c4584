//! The unified output of the tag decoders
//!
//! A [`Tag`] is produced once per parse call and handed to the caller whole;
//! nothing in this crate holds on to it or mutates it afterwards. Players
//! usually re-key [`Tag::frames`] into a map from frame ID to frame; the
//! [`Tag::get`] accessor and its named shorthands cover the common lookups
//! without one.

use crate::id3::FrameId;
use crate::id3::v1::LegacyFrame;
use crate::id3::v2::{CommentFrame, FrameFlags, PictureFrame, PrivateFrame, TextFrame, UrlFrame};

/// Flags that apply to an entire tag
///
/// Only the ID3v2 header carries flags; tags from the other decoders keep the
/// all-false default.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct TagFlags {
	/// Whether the tag content is unsynchronised
	///
	/// Recognized but never undone by this decoder.
	pub unsynchronisation: bool,
	/// Whether an extended header follows the tag header
	///
	/// Recognized but never parsed by this decoder.
	pub extended_header: bool,
	/// Indicates that the tag is in an experimental stage
	pub experimental: bool,
}

/// Represents a single decoded tag field
///
/// The variant says which decoder produced the frame and which fields it
/// carries; the frame ID says what the content means to a player.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Frame {
	/// A fixed-width field lifted out of an ID3v1 trailer
	Legacy(LegacyFrame),
	/// Represents a "T..." frame
	Text(TextFrame),
	/// Represents a "W..." frame
	Url(UrlFrame),
	/// Represents a "COMM" frame
	Comment(CommentFrame),
	/// Represents an "APIC" frame
	Picture(PictureFrame),
	/// Represents a "PRIV" frame
	Private(PrivateFrame),
}

impl Frame {
	/// Get the ID of the frame
	pub fn id(&self) -> &FrameId {
		match self {
			Frame::Legacy(frame) => frame.id(),
			Frame::Text(frame) => frame.id(),
			Frame::Url(frame) => frame.id(),
			Frame::Comment(frame) => frame.id(),
			Frame::Picture(frame) => frame.id(),
			Frame::Private(frame) => frame.id(),
		}
	}

	/// Whether the frame's primary payload is empty
	///
	/// The primary payload is the text for the textual variants and the image
	/// bytes for pictures; descriptions and owners don't count.
	pub fn is_empty(&self) -> bool {
		match self {
			Frame::Legacy(frame) => frame.is_empty(),
			Frame::Text(frame) => frame.is_empty(),
			Frame::Url(frame) => frame.is_empty(),
			Frame::Comment(frame) => frame.is_empty(),
			Frame::Picture(frame) => frame.is_empty(),
			Frame::Private(frame) => frame.is_empty(),
		}
	}

	/// The frame's primary payload as text, if it has a textual one
	///
	/// Returns `None` for picture frames.
	pub fn text(&self) -> Option<&str> {
		match self {
			Frame::Legacy(frame) => Some(&frame.data),
			Frame::Text(frame) => Some(&frame.value),
			Frame::Url(frame) => Some(frame.url()),
			Frame::Comment(frame) => Some(&frame.content),
			Frame::Private(frame) => Some(&frame.data),
			Frame::Picture(_) => None,
		}
	}

	/// Get the flags for the frame
	///
	/// Returns `None` for legacy frames; the trailer format has no flag bytes.
	pub fn flags(&self) -> Option<FrameFlags> {
		match self {
			Frame::Legacy(_) => None,
			Frame::Text(frame) => Some(frame.header.flags),
			Frame::Url(frame) => Some(frame.header.flags),
			Frame::Comment(frame) => Some(frame.header.flags),
			Frame::Picture(frame) => Some(frame.header.flags),
			Frame::Private(frame) => Some(frame.header.flags),
		}
	}

	/// Whether the frame had to be truncated or defaulted while parsing
	///
	/// See [`FrameHeader::is_degraded`](crate::id3::v2::FrameHeader::is_degraded).
	/// Always `false` for legacy frames.
	pub fn is_degraded(&self) -> bool {
		match self {
			Frame::Legacy(_) => false,
			Frame::Text(frame) => frame.header.is_degraded(),
			Frame::Url(frame) => frame.header.is_degraded(),
			Frame::Comment(frame) => frame.header.is_degraded(),
			Frame::Picture(frame) => frame.header.is_degraded(),
			Frame::Private(frame) => frame.header.is_degraded(),
		}
	}
}

impl From<LegacyFrame> for Frame {
	fn from(value: LegacyFrame) -> Self {
		Frame::Legacy(value)
	}
}

impl From<TextFrame> for Frame {
	fn from(value: TextFrame) -> Self {
		Frame::Text(value)
	}
}

impl From<UrlFrame> for Frame {
	fn from(value: UrlFrame) -> Self {
		Frame::Url(value)
	}
}

impl From<CommentFrame> for Frame {
	fn from(value: CommentFrame) -> Self {
		Frame::Comment(value)
	}
}

impl From<PictureFrame> for Frame {
	fn from(value: PictureFrame) -> Self {
		Frame::Picture(value)
	}
}

impl From<PrivateFrame> for Frame {
	fn from(value: PrivateFrame) -> Self {
		Frame::Private(value)
	}
}

/// Represents the decoded metadata of one audio file
///
/// Construction happens inside [`parse`](crate::parse) and the version
/// decoders; a tag is never mutated after it is returned.
///
/// # Examples
///
/// ```rust
/// use aud_tag::config::ParseOptions;
///
/// # fn main() -> aud_tag::error::Result<()> {
/// // No marker anywhere: still a tag, just an empty one
/// let tag = aud_tag::parse(&[0u8; 512], ParseOptions::new())?;
///
/// assert_eq!(tag.version(), "0.0.0");
/// assert!(tag.frames().is_empty());
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag {
	pub(crate) version: String,
	pub(crate) flags: TagFlags,
	pub(crate) frames: Vec<Frame>,
}

impl Tag {
	pub(crate) fn new(version: String, flags: TagFlags, frames: Vec<Frame>) -> Self {
		Self {
			version,
			flags,
			frames,
		}
	}

	/// The tag produced when a buffer holds no tag at all
	pub(crate) fn empty() -> Self {
		Self {
			version: String::from("0.0.0"),
			flags: TagFlags::default(),
			frames: Vec::new(),
		}
	}

	/// The version of the decoded tag
	///
	/// * `"0.0.0"` - no tag was present
	/// * `"1.0.0"` / `"1.1.0"` - an ID3v1 trailer, revision 1 iff a track
	///   number marker was found
	/// * `"2.<major>.<revision>"` - an ID3v2 tag, straight from its header
	pub fn version(&self) -> &str {
		&self.version
	}

	/// Get the flags for the tag
	pub fn flags(&self) -> TagFlags {
		self.flags
	}

	/// The decoded frames, in the order they appeared
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Consumes the tag, returning its frames
	pub fn into_frames(self) -> Vec<Frame> {
		self.frames
	}

	/// Get the first frame with the given ID
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::FrameId;
	/// use aud_tag::config::ParseOptions;
	/// use aud_tag::id3::v1::parse_id3v1;
	///
	/// # fn main() -> aud_tag::error::Result<()> {
	/// let mut buffer = vec![0u8; 128];
	/// buffer[..3].copy_from_slice(b"TAG");
	/// buffer[33..37].copy_from_slice(b"Band");
	///
	/// let tag = parse_id3v1(&buffer, ParseOptions::new())?;
	/// let artist = tag.get(&FrameId::ARTIST);
	/// assert_eq!(artist.and_then(|frame| frame.text()), Some("Band"));
	/// # Ok(()) }
	/// ```
	pub fn get(&self, id: &FrameId) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.id() == id)
	}

	/// The text of the first title (`TIT2`) frame
	pub fn title(&self) -> Option<&str> {
		self.get(&FrameId::TITLE).and_then(Frame::text)
	}

	/// The text of the first artist (`TPE1`) frame
	pub fn artist(&self) -> Option<&str> {
		self.get(&FrameId::ARTIST).and_then(Frame::text)
	}

	/// The text of the first album (`TALB`) frame
	pub fn album(&self) -> Option<&str> {
		self.get(&FrameId::ALBUM).and_then(Frame::text)
	}

	/// The text of the first year (`TYER`) frame
	pub fn year(&self) -> Option<&str> {
		self.get(&FrameId::YEAR).and_then(Frame::text)
	}

	/// The text of the first comment (`COMM`) frame
	pub fn comment(&self) -> Option<&str> {
		self.get(&FrameId::COMMENT).and_then(Frame::text)
	}

	/// The text of the first track number (`TRCK`) frame
	pub fn track(&self) -> Option<&str> {
		self.get(&FrameId::TRACK).and_then(Frame::text)
	}

	/// The text of the first genre (`TCON`) frame
	pub fn genre(&self) -> Option<&str> {
		self.get(&FrameId::GENRE).and_then(Frame::text)
	}

	/// The first attached picture frame
	pub fn picture(&self) -> Option<&PictureFrame> {
		self.frames.iter().find_map(|frame| match frame {
			Frame::Picture(picture) => Some(picture),
			_ => None,
		})
	}
}
