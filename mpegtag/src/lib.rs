//! Write embedded metadata into MPEG audio streams.
//!
//! This crate covers the two metadata regions an MP3-style container carries
//! alongside its audio frames:
//!
//! * **ID3v2.4 tag frames** — text ([`TextInformationFrame`](id3v2::TextInformationFrame)),
//!   comment ([`CommentFrame`](id3v2::CommentFrame)), and attached picture
//!   ([`AttachedPictureFrame`](id3v2::AttachedPictureFrame)) frames, serialized
//!   with synchsafe sizes so an MPEG frame scanner can never mistake a size
//!   field for a frame sync.
//! * **Xing VBR headers** — a synthetic first frame that is bit-for-bit a legal
//!   MPEG audio frame, carrying total frame count, byte size, and a coarse seek
//!   table for VBR-aware readers ([`mpeg::XingFrame`]).
//!
//! Output goes to any [`std::io::Write`] sink; the Xing writer additionally
//! requires [`std::io::Seek`], since the VBR payload is patched in at an offset
//! inside the already-written frame.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use mpegtag::id3v2::{Frame, FrameId, TextInformationFrame};
//!
//! # fn main() -> mpegtag::error::Result<()> {
//! let mut output = Cursor::new(Vec::new());
//!
//! let title = TextInformationFrame::new(FrameId::new("TIT2")?, String::from("Trying to Feel Alive"));
//! Frame::Text(title).write_to(&mut output)?;
//!
//! // 10-byte frame header + encoding byte + 20 bytes of text + terminator
//! assert_eq!(output.get_ref().len(), 32);
//! # Ok(()) }
//! ```

pub mod error;
pub mod id3v2;
pub(crate) mod macros;
pub mod mpeg;
pub mod picture;
mod util;

pub use util::text::TextEncoding;
