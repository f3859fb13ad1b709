use super::constants::{BITRATES, MIN_XING_FRAME_SIZE, SAMPLES, SAMPLE_RATES, SIDE_INFORMATION_SIZES};
use super::{ChannelMode, Emphasis, Layer, MpegVersion};
use crate::error::{Result, XingErrorKind};

use std::io::{Seek, SeekFrom, Write};

use byteorder::{BigEndian, WriteBytesExt};

// Option-returning table lookup; index 3 is the reserved sentinel
fn sample_rate(version: MpegVersion, index: u8) -> Option<u32> {
	if index >= 3 {
		return None;
	}

	Some(SAMPLE_RATES[version as usize][index as usize])
}

/// A synthetic first frame carrying Xing VBR metadata
///
/// The frame is written as a bit-for-bit legal MPEG audio frame for the given
/// stream configuration, with the VBR payload patched in past the side
/// information. Absent optional fields are written as zeroes so the physical
/// layout never depends on which of them were supplied; only the flag word
/// tells a reader which fields carry meaning.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use mpegtag::mpeg::{ChannelMode, Layer, MpegVersion, XingFrame};
///
/// # fn main() -> mpegtag::error::Result<()> {
/// let mut xing = XingFrame::new(
/// 	MpegVersion::V1,
/// 	Layer::Layer3,
/// 	0, // 44100 Hz
/// 	ChannelMode::Stereo,
/// );
/// xing.frame_count = Some(12480);
///
/// let mut output = Cursor::new(vec![0; 1024]);
/// let frame_len = xing.write_to(&mut output)?;
///
/// // The cursor sits directly behind the synthetic frame
/// assert_eq!(output.position(), u64::from(frame_len));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XingFrame {
	/// MPEG version of the stream
	pub version: MpegVersion,
	/// MPEG layer of the stream
	pub layer: Layer,
	/// Sampling-frequency index (0..=2; 3 is reserved)
	pub sample_rate_index: u8,
	/// Channel mode of the stream
	pub channel_mode: ChannelMode,
	/// Mode extension bits, only meaningful for joint stereo
	pub mode_extension: Option<u8>,
	/// Whether the audio is copyrighted
	pub copyright: bool,
	/// Whether the frame is on its original media
	pub original: bool,
	/// De-emphasis hint
	pub emphasis: Option<Emphasis>,
	/// Total number of audio frames in the stream
	pub frame_count: Option<u32>,
	/// Total size of the audio data in bytes
	pub file_size: Option<u32>,
	/// 100-entry coarse seek table
	pub toc: Option<[u8; 100]>,
}

impl XingFrame {
	/// Create a new [`XingFrame`] for the given stream configuration
	///
	/// All header flags and VBR fields start out unset and can be filled in
	/// directly before calling [`XingFrame::write_to`].
	pub fn new(
		version: MpegVersion,
		layer: Layer,
		sample_rate_index: u8,
		channel_mode: ChannelMode,
	) -> Self {
		Self {
			version,
			layer,
			sample_rate_index,
			channel_mode,
			mode_extension: None,
			copyright: false,
			original: false,
			emphasis: None,
			frame_count: None,
			file_size: None,
			toc: None,
		}
	}

	/// Write the complete synthetic frame to `writer`, returning its length
	///
	/// On success the cursor is left at the end of the frame. The region
	/// between the VBR payload and the frame end is not written to; whatever
	/// the underlying stream holds there is kept as filler.
	///
	/// # Errors
	///
	/// * The sampling-frequency index is reserved
	/// * No bitrate in the table yields a frame large enough for the payload
	/// * `writer` returns an error
	pub fn write_to<W>(&self, writer: &mut W) -> Result<u32>
	where
		W: Write + Seek,
	{
		let version_index = self.version.index();
		let layer_index = self.layer.index();

		let Some(sample_rate) = sample_rate(self.version, self.sample_rate_index) else {
			return Err(XingErrorKind::BadSampleRateIndex(self.sample_rate_index).into());
		};

		let samples = u32::from(SAMPLES[layer_index][version_index]);

		// Scan upwards for the cheapest bitrate whose standard frame size
		// (without padding) can hold the Xing payload
		let mut selection = None;
		for (bitrate_index, &bitrate) in BITRATES[version_index][layer_index].iter().enumerate() {
			if bitrate == 0 {
				continue;
			}

			let frame_len = samples * bitrate * 125 / sample_rate;
			if frame_len >= MIN_XING_FRAME_SIZE {
				selection = Some((bitrate_index as u32, bitrate, frame_len));
				break;
			}
		}

		let Some((bitrate_index, bitrate, frame_len)) = selection else {
			return Err(XingErrorKind::NoSuitableBitrate.into());
		};

		log::debug!("Xing: selected bitrate {bitrate} kbps ({frame_len} byte frame)");

		let frame_start = writer.stream_position()?;

		let mut mode_extension = self.mode_extension.unwrap_or(0);
		if mode_extension > 0b11 {
			log::warn!(
				"Xing: mode extension {mode_extension:#06b} exceeds 2 bits, discarding the high bits"
			);
			mode_extension &= 0b11;
		}

		let mut header = 0xFFE0_0000_u32; // frame sync
		header |= self.version.bits() << 19;
		header |= self.layer.bits() << 17;
		header |= 1 << 16; // not CRC protected
		header |= bitrate_index << 12;
		header |= u32::from(self.sample_rate_index) << 10;
		// Padding (bit 9) and private (bit 8) stay clear
		header |= (self.channel_mode as u32) << 6;
		header |= u32::from(mode_extension) << 4;
		header |= u32::from(self.copyright) << 3;
		header |= u32::from(self.original) << 2;
		header |= u32::from(self.emphasis.map_or(0, Emphasis::as_u8));
		writer.write_u32::<BigEndian>(header)?;

		// The VBR payload sits directly behind the side information
		let offset = 4 + SIDE_INFORMATION_SIZES[version_index][self.channel_mode as usize];
		writer.seek(SeekFrom::Start(frame_start + u64::from(offset)))?;

		writer.write_all(b"Xing")?;

		let mut flags = 0_u32;
		if self.frame_count.is_some() {
			flags |= 0x0001;
		}
		if self.file_size.is_some() {
			flags |= 0x0002;
		}
		if self.toc.is_some() {
			flags |= 0x0004;
		}
		writer.write_u32::<BigEndian>(flags)?;

		// Fixed layout: absent fields are still written, as zeroes
		writer.write_u32::<BigEndian>(self.frame_count.unwrap_or(0))?;
		writer.write_u32::<BigEndian>(self.file_size.unwrap_or(0))?;
		writer.write_all(&self.toc.unwrap_or([0; 100]))?;

		writer.seek(SeekFrom::Start(frame_start + u64::from(frame_len)))?;

		Ok(frame_len)
	}
}
