/// Options to control how tag buffers are parsed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) skip_empty_frames: bool,
	pub(crate) version_preference: VersionPreference,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	skip_empty_frames: false,
	/// 	version_preference: VersionPreference::PreferId3v2,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			skip_empty_frames: false,
			version_preference: VersionPreference::PreferId3v2,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to drop frames whose payload is empty
	///
	/// Note that the ID3v1 genre frame is exempt; it is appended after the
	/// other trailer fields have been filtered, so it survives even when its
	/// payload is empty.
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::config::ParseOptions;
	///
	/// // A player list has no use for nameless fields
	/// let parsing_options = ParseOptions::new().skip_empty_frames(true);
	/// ```
	pub fn skip_empty_frames(&mut self, skip_empty_frames: bool) -> Self {
		self.skip_empty_frames = skip_empty_frames;
		*self
	}

	/// Which tag format(s) the locator may select, see [`VersionPreference`]
	///
	/// # Examples
	///
	/// ```rust
	/// use aud_tag::config::{ParseOptions, VersionPreference};
	///
	/// // Only the 128-byte trailer is of interest
	/// let parsing_options = ParseOptions::new().version_preference(VersionPreference::Id3v1Only);
	/// ```
	pub fn version_preference(&mut self, version_preference: VersionPreference) -> Self {
		self.version_preference = version_preference;
		*self
	}
}

/// The parsing strictness mode
///
/// # Examples
///
/// ```rust
/// use aud_tag::config::{ParseOptions, ParsingMode};
///
/// // We only want to read well-formed tags
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * A frame's declared size runs past the buffer - The parser will error and the entire tag is discarded
	/// * A frame header is truncated - The parser will error and the entire tag is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// This mode will attempt to fill in any holes where possible in otherwise valid input.
	///
	/// ## Examples of behavior
	///
	/// * A frame's declared size runs past the buffer - The frame is truncated to the available
	///   bytes and marked [degraded](crate::id3::v2::FrameHeader::is_degraded)
	/// * A frame header is truncated - Frame iteration stops, everything decoded so far is kept
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// This mode will discard any invalid frames, and ignore the majority of non-fatal errors.
	///
	/// ## Examples of behavior
	///
	/// * A frame's declared size runs past the buffer - The frame is dropped and iteration continues
	/// * A frame header is truncated - Frame iteration stops, everything decoded so far is kept
	Relaxed,
}

/// Which tag format(s) the locator may select
///
/// A buffer can carry both an ID3v2 header tag and an ID3v1 trailer tag at
/// once; one parse call only ever decodes one of them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum VersionPreference {
	/// Only probe for the 128-byte ID3v1 trailer
	Id3v1Only,
	/// Only probe for the ID3v2 header tag
	Id3v2Only,
	/// Probe for ID3v2 first and fall back to ID3v1
	#[default]
	PreferId3v2,
}
