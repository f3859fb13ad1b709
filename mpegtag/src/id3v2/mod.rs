//! ID3v2.4 frame writing
//!
//! Only the frame types this writer emits are modeled: text information
//! frames, comment frames, and attached-picture frames. Every frame is
//! written with a synchsafe size and zeroed flag bytes.

mod frame;
pub mod synchsafe;

pub use frame::items::{AttachedPictureFrame, CommentFrame, TextInformationFrame};
pub use frame::{Frame, FrameId};
pub use synchsafe::SynchsafeInteger;
