//! Decode ID3 metadata out of audio file buffers.
//!
//! Two incompatible tag formats may coexist in the same file: a fixed
//! 128-byte ID3v1 trailer and a variable-length, frame-based ID3v2 header
//! tag. [`parse`] probes for both, decodes one of them, and returns a
//! [`Tag`]: a version string, the tag-level flags, and the decoded frames in
//! order. Decoding is purely in-memory; reading the file (and slicing it to
//! a region large enough to hold the tag) is the caller's business, as is
//! anything visual done with the result.
//!
//! Malformed tags are common in the wild, so the decoders lean defensive by
//! default: unknown frame IDs are skipped, truncated frames are kept in
//! degraded form, and a buffer without any tag yields an empty [`Tag`]
//! rather than an error. See [`config::ParsingMode`] to tighten or loosen
//! that.
//!
//! # Examples
//!
//! ## Reading an ID3v1 trailer
//!
//! ```rust
//! use aud_tag::config::ParseOptions;
//!
//! # fn main() -> aud_tag::error::Result<()> {
//! // The last 128 bytes of the file hold the trailer
//! let mut buffer = vec![0u8; 128];
//! buffer[..3].copy_from_slice(b"TAG");
//! buffer[3..12].copy_from_slice(b"Test Song");
//!
//! let tag = aud_tag::parse(&buffer, ParseOptions::new())?;
//!
//! assert_eq!(tag.version(), "1.1.0");
//! assert_eq!(tag.title(), Some("Test Song"));
//! # Ok(()) }
//! ```
//!
//! ## Looking frames up by ID
//!
//! ```rust
//! use aud_tag::FrameId;
//! use aud_tag::config::ParseOptions;
//!
//! # fn main() -> aud_tag::error::Result<()> {
//! # let mut buffer = vec![0u8; 128];
//! # buffer[..3].copy_from_slice(b"TAG");
//! # buffer[3..12].copy_from_slice(b"Test Song");
//! let tag = aud_tag::parse(&buffer, ParseOptions::new())?;
//!
//! for frame in tag.frames() {
//! 	let label = frame.id().description().unwrap_or("Other");
//! 	println!("{label}: {:?}", frame.text());
//! }
//! # Ok(()) }
//! ```

mod macros;
mod util;

pub mod config;
pub mod error;
pub mod id3;
pub mod tag;

pub use id3::{FrameId, TagFormat, locate};
pub use tag::{Frame, Tag, TagFlags};
pub use util::text::TextEncoding;

use config::ParseOptions;
use error::Result;

/// Decode whichever tag `buffer` carries
///
/// The locator probes for the markers allowed by
/// [`ParseOptions::version_preference`] and hands the buffer to the matching
/// decoder. A buffer without an acceptable marker is **not** an error; it
/// produces an empty [`Tag`] with version `"0.0.0"`.
///
/// A file carrying both formats is decoded as one of them, never both; run
/// [`parse`] twice with different preferences to read the other.
///
/// # Errors
///
/// Whatever the selected decoder can raise, see
/// [`parse_id3v1`](id3::v1::parse_id3v1) and
/// [`parse_id3v2`](id3::v2::parse_id3v2).
///
/// # Examples
///
/// ```rust
/// use aud_tag::config::ParseOptions;
///
/// # fn main() -> aud_tag::error::Result<()> {
/// let tag = aud_tag::parse(b"not a tag at all", ParseOptions::new())?;
/// assert_eq!(tag.version(), "0.0.0");
/// # Ok(()) }
/// ```
pub fn parse(buffer: &[u8], parse_options: ParseOptions) -> Result<Tag> {
	match id3::locate(buffer, parse_options.version_preference) {
		Some(TagFormat::Id3v2) => id3::v2::parse_id3v2(buffer, parse_options),
		Some(TagFormat::Id3v1) => id3::v1::parse_id3v1(buffer, parse_options),
		None => {
			log::debug!("No tag marker found, returning an empty tag");
			Ok(Tag::empty())
		},
	}
}
