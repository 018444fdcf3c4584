use crate::util::text::latin1_decode;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An ID3 frame ID
///
/// IDs are short symbolic codes, 4 characters in ID3v2 (`TIT2`, `APIC`, ...).
/// The ID3v1 decoder reuses the same codes for the fields it lifts out of the
/// trailer, so callers can key their lookups off one symbol set.
///
/// # Examples
///
/// ```rust
/// use aud_tag::FrameId;
///
/// assert_eq!(FrameId::TITLE.as_str(), "TIT2");
/// assert_eq!(FrameId::TITLE.description(), Some("Title"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrameId(Cow<'static, str>);

impl FrameId {
	/// Title/songname/content description (`TIT2`)
	pub const TITLE: Self = Self(Cow::Borrowed("TIT2"));
	/// Lead performer(s)/soloist(s) (`TPE1`)
	pub const ARTIST: Self = Self(Cow::Borrowed("TPE1"));
	/// Album/movie/show title (`TALB`)
	pub const ALBUM: Self = Self(Cow::Borrowed("TALB"));
	/// Year of release (`TYER`)
	pub const YEAR: Self = Self(Cow::Borrowed("TYER"));
	/// Track number (`TRCK`)
	pub const TRACK: Self = Self(Cow::Borrowed("TRCK"));
	/// Comment (`COMM`)
	pub const COMMENT: Self = Self(Cow::Borrowed("COMM"));
	/// Genre/content type (`TCON`)
	pub const GENRE: Self = Self(Cow::Borrowed("TCON"));
	/// Composer (`TCOM`)
	pub const COMPOSER: Self = Self(Cow::Borrowed("TCOM"));
	/// Attached picture (`APIC`)
	pub const PICTURE: Self = Self(Cow::Borrowed("APIC"));
	/// Private data (`PRIV`)
	pub const PRIVATE: Self = Self(Cow::Borrowed("PRIV"));

	/// Raw frame ID bytes are read as Latin-1 characters; garbage IDs survive
	/// the trip so skipped frames can still be logged by name.
	pub(crate) fn from_bytes(bytes: [u8; 4]) -> Self {
		Self(Cow::Owned(latin1_decode(&bytes)))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// A human-readable description of the IDs commonly shown by players
	///
	/// Returns `None` for IDs outside the well-known set.
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::FrameId;
	///
	/// assert_eq!(FrameId::PICTURE.description(), Some("Attached picture"));
	/// assert_eq!(FrameId::PRIVATE.description(), None);
	/// ```
	pub fn description(&self) -> Option<&'static str> {
		match self.as_str() {
			"APIC" => Some("Attached picture"),
			"TIT2" => Some("Title"),
			"TPE1" => Some("Artist"),
			"TALB" => Some("Album"),
			"TYER" => Some("Year of release"),
			"COMM" => Some("Comment"),
			"TCON" => Some("Genre"),
			"TCOM" => Some("Composer"),
			"TRCK" => Some("Track number"),
			_ => None,
		}
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
