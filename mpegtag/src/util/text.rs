/// The text encoding for use in ID3v2 frames
///
/// Only the two encodings this writer emits are represented; the discriminants
/// are the ID3v2.4 encoding-flag byte values.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-8
	Utf8 = 3,
}

impl TextEncoding {
	/// Select the cheapest encoding able to represent `text`
	///
	/// [`TextEncoding::Latin1`] is chosen whenever every character fits in a
	/// single byte; a single character outside that range forces
	/// [`TextEncoding::Utf8`], regardless of its position in the string.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegtag::TextEncoding;
	///
	/// assert_eq!(TextEncoding::for_text("Stairway to Heaven"), TextEncoding::Latin1);
	/// assert_eq!(TextEncoding::for_text("текст"), TextEncoding::Utf8);
	/// ```
	pub fn for_text(text: &str) -> Self {
		if Self::verify_latin1(text) {
			Self::Latin1
		} else {
			Self::Utf8
		}
	}

	pub(crate) fn verify_latin1(text: &str) -> bool {
		text.chars().all(|c| c as u32 <= 255)
	}

	/// Encode `text`, appending a single NUL terminator when `terminated`
	///
	/// The `Latin1` path truncates each character code to one byte; callers
	/// pick the encoding with [`TextEncoding::for_text`] beforehand so the
	/// truncation is lossless.
	pub(crate) fn encode(self, text: &str, terminated: bool) -> Vec<u8> {
		let mut out = match self {
			TextEncoding::Latin1 => latin1_encode(text).collect::<Vec<u8>>(),
			TextEncoding::Utf8 => text.as_bytes().to_vec(),
		};

		if terminated {
			out.push(0);
		}

		out
	}
}

pub(crate) fn latin1_encode(s: &str) -> impl Iterator<Item = u8> + '_ {
	s.chars().map(|c| c as u8)
}

#[cfg(test)]
mod tests {
	use super::TextEncoding;

	const LATIN1_STRING: &str = "l\u{00f8}ft\u{00a5}";

	#[test_log::test]
	fn encoding_selection() {
		assert_eq!(TextEncoding::for_text(""), TextEncoding::Latin1);
		assert_eq!(TextEncoding::for_text("plain ascii"), TextEncoding::Latin1);
		assert_eq!(TextEncoding::for_text(LATIN1_STRING), TextEncoding::Latin1);

		// A single out-of-range character is enough, wherever it sits
		assert_eq!(TextEncoding::for_text("\u{1F3B5} lead"), TextEncoding::Utf8);
		assert_eq!(TextEncoding::for_text("mid \u{0416} dle"), TextEncoding::Utf8);
		assert_eq!(TextEncoding::for_text("trail \u{2020}"), TextEncoding::Utf8);
	}

	#[test_log::test]
	fn latin1_encode() {
		let encoded = TextEncoding::Latin1.encode(LATIN1_STRING, false);
		assert_eq!(encoded.as_slice(), &[0x6C, 0xF8, 0x66, 0x74, 0xA5]);

		let terminated = TextEncoding::Latin1.encode(LATIN1_STRING, true);
		assert_eq!(terminated.as_slice(), &[0x6C, 0xF8, 0x66, 0x74, 0xA5, 0x00]);
	}

	#[test_log::test]
	fn utf8_encode() {
		let encoded = TextEncoding::Utf8.encode("text \u{0416}", false);
		assert_eq!(encoded.as_slice(), "text \u{0416}".as_bytes());

		// Multi-byte characters make the byte length exceed the char count
		assert!(encoded.len() > "text \u{0416}".chars().count());

		let terminated = TextEncoding::Utf8.encode("", true);
		assert_eq!(terminated.as_slice(), &[0x00]);
	}
}
