//! Contains the errors that can arise within mpegtag
//!
//! The primary error is [`MpegTagError`]. The type of error is determined by
//! [`ErrorKind`], which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MpegTagError>`
pub type Result<T> = std::result::Result<T, MpegTagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Attempting to write an abnormally large amount of data
	///
	/// A synchsafe frame size has 28 usable bits, so no single frame payload
	/// may exceed `0x0FFF_FFFF` (~256 MiB) bytes.
	TooMuchData,
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	/// or if the ID is not exactly 4 characters long
	BadFrameId(Vec<u8>),
	/// Arises when writing a comment frame with an invalid ISO-639-2 language code
	InvalidLanguage([u8; 3]),
	/// Errors that arise while synthesizing a Xing header frame
	Xing(XingErrorKind),

	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// The types of errors that can occur while synthesizing a Xing header frame
///
/// These are all format-parameter errors: they are deterministic for a given
/// stream configuration, so retrying without changing inputs cannot succeed.
#[derive(Debug)]
#[non_exhaustive]
pub enum XingErrorKind {
	/// Arises when the sampling-frequency index is the reserved value (3) or out of range
	BadSampleRateIndex(u8),
	/// Arises when no bitrate in the table produces a frame large enough to
	/// hold the Xing payload for this version/layer/sample rate combination
	///
	/// With the standard ISO bitrate and sample-rate tables every valid
	/// combination yields a large enough frame at its maximum bitrate, so this
	/// guards the selection loop against future table changes rather than any
	/// currently reachable input.
	NoSuitableBitrate,
}

impl Display for XingErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadSampleRateIndex(index) => {
				write!(f, "Sampling-frequency index {index} is reserved")
			},
			Self::NoSuitableBitrate => write!(
				f,
				"No bitrate yields a frame large enough to hold the Xing payload"
			),
		}
	}
}

/// The error type for all operations in this crate
///
/// Returned by every fallible writer; inspect [`MpegTagError::kind`] to
/// distinguish format-parameter failures from I/O failures.
pub struct MpegTagError {
	kind: ErrorKind,
}

impl MpegTagError {
	/// Create a `MpegTagError` from an [`ErrorKind`]
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for MpegTagError {}

impl Debug for MpegTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for MpegTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			ErrorKind::TooMuchData => write!(
				f,
				"An abnormally large amount of data was provided (frame payloads are limited to \
				 2^28 - 1 bytes)"
			),
			ErrorKind::BadFrameId(id) => write!(f, "Failed to parse a frame ID: 0x{id:x?}"),
			ErrorKind::InvalidLanguage(lang) => write!(
				f,
				"Invalid frame language found: {lang:?} (expected 3 ascii characters)"
			),
			ErrorKind::Xing(err) => write!(f, "Xing: {err}"),
			ErrorKind::Io(err) => write!(f, "{err}"),
		}
	}
}

impl From<XingErrorKind> for MpegTagError {
	fn from(input: XingErrorKind) -> Self {
		Self {
			kind: ErrorKind::Xing(input),
		}
	}
}

impl From<std::io::Error> for MpegTagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}
