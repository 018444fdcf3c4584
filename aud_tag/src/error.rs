//! Contains the errors that can arise while decoding tags
//!
//! The primary error is [`TagError`]. The type of error is determined by
//! [`ErrorKind`], which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, TagError>`
pub type Result<T> = std::result::Result<T, TagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The buffer is shorter than the minimum required for the requested decode
	InvalidInput(&'static str),
	/// Arises when a tag is expected, but its marker isn't found
	///
	/// Note that a buffer simply *containing no tag* is not an error; the
	/// top-level [`parse`](crate::parse) returns an empty [`Tag`](crate::Tag)
	/// for it. `FakeTag` only arises when a version-specific decoder is
	/// invoked directly on a buffer without that version's marker.
	FakeTag,
	/// Errors that arise while decoding ID3v2 frames
	Id3v2(Id3v2Error),
}

/// The types of errors that can occur while decoding ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	/// Arises when a frame header starts inside the declared tag size, but there
	/// aren't enough bytes left to hold one
	TruncatedFrameHeader,
	/// Arises when a frame's declared content size exceeds the bytes remaining
	/// in the buffer
	///
	/// Only surfaced under [`ParsingMode::Strict`](crate::config::ParsingMode::Strict);
	/// the other modes recover by truncating the frame to the available bytes.
	BadFrameLength,
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::TruncatedFrameHeader => {
				write!(f, "Tag declares another frame, but no full frame header is left")
			},
			Self::BadFrameLength => write!(
				f,
				"Frame content size runs past the end of the available data"
			),
		}
	}
}

/// An error that arises while decoding an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within this crate
pub struct TagError {
	pub(crate) kind: ErrorKind,
}

impl TagError {
	/// Create a `TagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::error::{ErrorKind, TagError};
	///
	/// let fake_tag = TagError::new(ErrorKind::FakeTag);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::error::{ErrorKind, TagError};
	///
	/// let fake_tag = TagError::new(ErrorKind::FakeTag);
	/// if let ErrorKind::FakeTag = fake_tag.kind() {
	/// 	println!("Where's the marker?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TagError {}

impl Debug for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for TagError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl Display for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::InvalidInput(message) => {
				write!(f, "Invalid input: {message}")
			},
			ErrorKind::FakeTag => write!(f, "Reading: Expected a tag, found invalid data"),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
		}
	}
}
