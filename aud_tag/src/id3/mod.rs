//! ID3 specific items
//!
//! The two tag formats are incompatible and may coexist in one file: an ID3v2
//! tag sits at the start of the buffer, an ID3v1 tag occupies the last 128
//! bytes. [`locate`] decides which decoder a buffer goes to; one parse call
//! never mixes frames from both formats into a single [`Tag`](crate::Tag).

mod frame_id;
pub mod v1;
pub mod v2;

pub use frame_id::FrameId;

use crate::config::VersionPreference;
use v1::constants::ID3V1_TAG_MARKER;

/// The tag format selected for a buffer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TagFormat {
	/// The fixed 128-byte trailer tag
	Id3v1,
	/// The variable-length, frame-based header tag
	Id3v2,
}

/// Determine which tag format a buffer should be decoded as
///
/// Returns `None` when no acceptable marker is present; that is not an error,
/// and [`parse`](crate::parse) maps it to an empty [`Tag`](crate::Tag).
///
/// # Examples
///
/// ```rust
/// use aud_tag::config::VersionPreference;
/// use aud_tag::id3::{TagFormat, locate};
///
/// let mut buffer = vec![0u8; 256];
/// buffer[..3].copy_from_slice(b"ID3");
///
/// let format = locate(&buffer, VersionPreference::PreferId3v2);
/// assert_eq!(format, Some(TagFormat::Id3v2));
/// ```
pub fn locate(buffer: &[u8], preference: VersionPreference) -> Option<TagFormat> {
	match preference {
		VersionPreference::Id3v1Only => contains_id3v1(buffer).then_some(TagFormat::Id3v1),
		VersionPreference::Id3v2Only => contains_id3v2(buffer).then_some(TagFormat::Id3v2),
		VersionPreference::PreferId3v2 => {
			if contains_id3v2(buffer) {
				return Some(TagFormat::Id3v2);
			}

			contains_id3v1(buffer).then_some(TagFormat::Id3v1)
		},
	}
}

pub(crate) fn contains_id3v1(buffer: &[u8]) -> bool {
	// The marker check must not reach outside the buffer
	let Some(tag_start) = buffer.len().checked_sub(128) else {
		return false;
	};

	buffer[tag_start..tag_start + 3] == ID3V1_TAG_MARKER
}

pub(crate) fn contains_id3v2(buffer: &[u8]) -> bool {
	buffer.starts_with(b"ID3")
}

#[cfg(test)]
mod tests {
	use super::{TagFormat, contains_id3v1, contains_id3v2, locate};
	use crate::config::VersionPreference;

	fn buffer_with_both_markers() -> Vec<u8> {
		let mut buffer = vec![0u8; 300];
		buffer[..3].copy_from_slice(b"ID3");
		let tag_start = buffer.len() - 128;
		buffer[tag_start..tag_start + 3].copy_from_slice(b"TAG");
		buffer
	}

	#[test]
	fn id3v1_marker_requires_128_bytes() {
		let mut buffer = vec![0u8; 127];
		buffer[..3].copy_from_slice(b"TAG");
		assert!(!contains_id3v1(&buffer));
	}

	#[test]
	fn id3v2_marker_at_buffer_start() {
		assert!(contains_id3v2(b"ID3\x03\x00"));
		assert!(!contains_id3v2(b"ID"));
		assert!(!contains_id3v2(b"XID3"));
	}

	#[test]
	fn preference_matrix() {
		let both = buffer_with_both_markers();

		assert_eq!(
			locate(&both, VersionPreference::PreferId3v2),
			Some(TagFormat::Id3v2)
		);
		assert_eq!(
			locate(&both, VersionPreference::Id3v1Only),
			Some(TagFormat::Id3v1)
		);
		assert_eq!(
			locate(&both, VersionPreference::Id3v2Only),
			Some(TagFormat::Id3v2)
		);
	}

	#[test]
	fn prefer_id3v2_falls_back_to_id3v1() {
		let mut buffer = vec![0u8; 300];
		let tag_start = buffer.len() - 128;
		buffer[tag_start..tag_start + 3].copy_from_slice(b"TAG");

		assert_eq!(
			locate(&buffer, VersionPreference::PreferId3v2),
			Some(TagFormat::Id3v1)
		);
		assert_eq!(locate(&buffer, VersionPreference::Id3v2Only), None);
	}

	#[test]
	fn no_markers_selects_nothing() {
		let buffer = vec![0u8; 300];
		assert_eq!(locate(&buffer, VersionPreference::PreferId3v2), None);
	}
}
