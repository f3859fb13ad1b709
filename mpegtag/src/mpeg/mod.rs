//! Xing header synthesis for MPEG audio streams
//!
//! A VBR stream carries its metadata in a synthetic first frame: structurally
//! a valid MPEG audio frame, but with a "Xing" tag patched in past the side
//! information. Naive decoders play it as garbage or skip it; VBR-aware
//! readers find the frame count, byte size, and seek table at a fixed offset.

mod constants;
mod xing;

pub use xing::XingFrame;

/// MPEG Audio version
#[derive(Default, PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
pub enum MpegVersion {
	#[default]
	V1 = 0,
	V2 = 1,
	V2_5 = 2,
}

impl MpegVersion {
	// The version bits of a frame header
	pub(crate) fn bits(self) -> u32 {
		match self {
			Self::V1 => 0b11,
			Self::V2 => 0b10,
			Self::V2_5 => 0b00,
		}
	}

	// MPEG-2 and MPEG-2.5 share their bitrate and side-information tables
	pub(crate) fn index(self) -> usize {
		match self {
			Self::V1 => 0,
			Self::V2 | Self::V2_5 => 1,
		}
	}
}

/// MPEG layer
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Layer {
	Layer1 = 1,
	Layer2 = 2,
	#[default]
	Layer3 = 3,
}

impl Layer {
	// The layer bits of a frame header
	pub(crate) fn bits(self) -> u32 {
		match self {
			Self::Layer1 => 0b11,
			Self::Layer2 => 0b10,
			Self::Layer3 => 0b01,
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize - 1
	}
}

/// Channel mode
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ChannelMode {
	#[default]
	Stereo = 0,
	JointStereo = 1,
	/// Two independent mono channels
	DualChannel = 2,
	SingleChannel = 3,
}

/// A rarely-used decoder hint that the file must be de-emphasized
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs, non_camel_case_types)]
pub enum Emphasis {
	/// 50/15 ms
	MS5015,
	Reserved,
	/// CCIT J.17
	CCIT_J17,
}

impl Emphasis {
	pub(crate) fn as_u8(self) -> u8 {
		match self {
			Self::MS5015 => 1,
			Self::Reserved => 2,
			Self::CCIT_J17 => 3,
		}
	}
}
