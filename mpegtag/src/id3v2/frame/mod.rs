pub(crate) mod items;

use crate::error::Result;
use crate::id3v2::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use items::{AttachedPictureFrame, CommentFrame, TextInformationFrame};

/// An `ID3v2` frame ID
///
/// A valid ID is exactly 4 characters, each within `'A'..='Z'` or `'0'..='9'`.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub struct FrameId(Cow<'static, str>);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be `'A'..='Z'` or `'0'..='9'`)
	/// * `id` is not exactly 4 characters long
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegtag::id3v2::FrameId;
	///
	/// assert!(FrameId::new("TALB").is_ok());
	/// assert!(FrameId::new("tit2").is_err());
	/// assert!(FrameId::new("TT2").is_err());
	/// ```
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: Into<Cow<'static, str>>,
	{
		let id = id.into();

		if id.len() != 4 || !id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
			err!(BadFrameId(id.into_owned().into_bytes()));
		}

		Ok(Self(id))
	}

	// For the fixed IDs of the non-text frame types, which are known valid
	pub(crate) const fn new_unchecked(id: &'static str) -> Self {
		Self(Cow::Borrowed(id))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A tag frame this writer can emit
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use mpegtag::id3v2::{CommentFrame, Frame};
///
/// # fn main() -> mpegtag::error::Result<()> {
/// let mut output = Cursor::new(Vec::new());
///
/// let comment = CommentFrame::new(String::from("Encoded with mpegtag"));
/// Frame::Comment(comment).write_to(&mut output)?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
	/// A text information frame (any `T***` ID)
	Text(TextInformationFrame),
	/// A `COMM` comment frame
	Comment(CommentFrame),
	/// An `APIC` attached-picture frame
	Picture(AttachedPictureFrame),
}

impl Frame {
	/// Get the ID for the frame
	pub fn id(&self) -> FrameId {
		match self {
			Frame::Text(frame) => frame.id.clone(),
			Frame::Comment(_) => FrameId::new_unchecked("COMM"),
			Frame::Picture(_) => FrameId::new_unchecked("APIC"),
		}
	}

	/// Convert the frame content to a byte vec
	///
	/// NOTE: This does not include the frame header
	///
	/// # Errors
	///
	/// * [`Frame::Comment`]: the language is not 3 ASCII alphabetic characters
	/// * [`Frame::Picture`]: the payload exceeds the synchsafe size range
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		match self {
			Frame::Text(frame) => Ok(frame.as_bytes()),
			Frame::Comment(frame) => frame.as_bytes(),
			Frame::Picture(frame) => frame.as_bytes(),
		}
	}

	/// Write the complete frame (header and content) to `writer`
	///
	/// # Errors
	///
	/// * The content fails to build (see [`Frame::as_bytes`])
	/// * `writer` returns an error
	pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		let value = self.as_bytes()?;
		write_frame(writer, &self.id(), &value)
	}
}

// The shared frame skeleton: ID, synchsafe size, zeroed flags, content.
//
// The size must describe the content exactly; a mismatch corrupts every
// subsequent frame for readers that skip unknown frames by size.
pub(crate) fn write_frame<W>(writer: &mut W, id: &FrameId, value: &[u8]) -> Result<()>
where
	W: Write,
{
	let Ok(len) = u32::try_from(value.len()) else {
		err!(TooMuchData);
	};

	writer.write_all(id.as_str().as_bytes())?;
	writer.write_u32::<BigEndian>(len.synch()?)?;
	// Frame status/format flags, always zero here
	writer.write_u16::<BigEndian>(0)?;
	writer.write_all(value)?;

	Ok(())
}
