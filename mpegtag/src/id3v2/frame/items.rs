use crate::error::Result;
use crate::id3v2::FrameId;
use crate::macros::err;
use crate::picture::PictureType;
use crate::util::text::TextEncoding;

/// An `ID3v2` text information frame
///
/// The encoding flag is decided per frame when it is serialized:
/// Latin-1 when the text allows it, UTF-8 otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInformationFrame {
	/// The ID of the frame, eg. `TIT2` or `TALB`
	pub id: FrameId,
	/// The frame content
	pub value: String,
}

impl TextInformationFrame {
	/// Create a new [`TextInformationFrame`]
	pub fn new(id: FrameId, value: String) -> Self {
		Self { id, value }
	}

	pub(crate) fn as_bytes(&self) -> Vec<u8> {
		let encoding = TextEncoding::for_text(&self.value);

		let mut content = vec![encoding as u8];
		content.extend(encoding.encode(&self.value, true));
		content
	}
}

/// An `ID3v2` comment frame
///
/// The encoding flag is computed from the comment content alone and applied
/// to the description as well; the format has no room for per-field flags.
/// [`CommentFrame::new`] leaves the description empty, which sidesteps any
/// possible mismatch between the two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentFrame {
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl CommentFrame {
	/// Create a new [`CommentFrame`] with an undetermined (`und`) language
	/// and no description
	pub fn new(content: String) -> Self {
		Self {
			language: *b"und",
			description: String::new(),
			content,
		}
	}

	pub(crate) fn as_bytes(&self) -> Result<Vec<u8>> {
		if !self.language.iter().all(u8::is_ascii_alphabetic) {
			err!(InvalidLanguage(self.language));
		}

		let encoding = TextEncoding::for_text(&self.content);

		let mut content = vec![encoding as u8];
		content.extend_from_slice(&self.language);
		content.extend(encoding.encode(&self.description, true));
		content.extend(encoding.encode(&self.content, true));
		Ok(content)
	}
}

/// An `ID3v2` attached picture frame
///
/// The mime type and description share the frame's single encoding flag: if
/// either of them needs UTF-8, both are written as UTF-8. For the ASCII mime
/// types in practice the two encodings produce identical bytes, so the
/// unification costs nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedPictureFrame {
	/// The mime type of the image, eg. `image/jpeg`
	pub mime_type: String,
	/// The type of picture according to APIC
	pub pic_type: PictureType,
	/// A short description of the image
	pub description: String,
	/// The raw image bytes
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Create a new [`AttachedPictureFrame`]
	pub fn new(
		mime_type: String,
		pic_type: PictureType,
		description: String,
		data: Vec<u8>,
	) -> Self {
		Self {
			mime_type,
			pic_type,
			description,
			data,
		}
	}

	pub(crate) fn as_bytes(&self) -> Result<Vec<u8>> {
		let encoding = if TextEncoding::verify_latin1(&self.mime_type)
			&& TextEncoding::verify_latin1(&self.description)
		{
			TextEncoding::Latin1
		} else {
			TextEncoding::Utf8
		};

		let mut content = vec![encoding as u8];
		content.extend(encoding.encode(&self.mime_type, true));
		content.push(self.pic_type.as_u8());
		content.extend(encoding.encode(&self.description, true));
		// No terminator; the image length is implied by the frame size
		content.extend_from_slice(&self.data);

		if u32::try_from(content.len()).is_err() {
			err!(TooMuchData);
		}

		Ok(content)
	}
}
