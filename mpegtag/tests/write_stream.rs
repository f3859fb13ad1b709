//! Integration tests for writing ID3v2 tags and MPEG frames to a stream.

use mpegtag::id3v2::{
	AttachedPictureFrame, CommentFrame, Frame, FrameId, SynchsafeInteger, TextInformationFrame,
};
use mpegtag::mpeg::{ChannelMode, Layer, MpegVersion, XingFrame};
use mpegtag::picture::PictureType;

use std::io::{Cursor, Seek, Write};

fn text_frame(id: &'static str, value: &str) -> Frame {
	Frame::Text(TextInformationFrame::new(
		FrameId::new(id).unwrap(),
		String::from(value),
	))
}

// Walk the stream the way a tag reader would: trust each frame's size field
// to skip to the next one. Returns the IDs in stream order.
fn walk_frames(bytes: &[u8], frame_count: usize) -> Vec<String> {
	let mut ids = Vec::new();
	let mut pos = 0;

	for _ in 0..frame_count {
		let id = std::str::from_utf8(&bytes[pos..pos + 4]).unwrap();
		let size = u32::from_be_bytes(bytes[pos + 4..pos + 8].try_into().unwrap()).unsynch();
		let flags = u16::from_be_bytes(bytes[pos + 8..pos + 10].try_into().unwrap());

		assert_eq!(flags, 0);

		ids.push(String::from(id));
		pos += 10 + size as usize;
	}

	assert_eq!(pos, bytes.len());
	ids
}

#[test_log::test]
fn frames_are_skippable_by_size() {
	let mut output = Cursor::new(Vec::new());

	text_frame("TIT2", "Trying to Feel Alive")
		.write_to(&mut output)
		.unwrap();
	text_frame("TPE1", "\u{30DB}\u{30EB}\u{30B7}")
		.write_to(&mut output)
		.unwrap();

	Frame::Comment(CommentFrame::new(String::from("from an old rip")))
		.write_to(&mut output)
		.unwrap();

	Frame::Picture(AttachedPictureFrame::new(
		String::from("image/jpeg"),
		PictureType::CoverFront,
		String::new(),
		vec![0x42; 1024],
	))
	.write_to(&mut output)
	.unwrap();

	let bytes = output.into_inner();
	let ids = walk_frames(&bytes, 4);
	assert_eq!(ids, ["TIT2", "TPE1", "COMM", "APIC"]);
}

#[test_log::test]
fn tag_region_then_xing_frame() {
	// A zero-filled stream, as a muxer reserving space would produce
	let mut output = Cursor::new(vec![0_u8; 4096]);

	text_frame("TALB", "Container Music")
		.write_to(&mut output)
		.unwrap();
	let tag_end = output.stream_position().unwrap();

	let mut xing = XingFrame::new(MpegVersion::V1, Layer::Layer3, 0, ChannelMode::Stereo);
	xing.frame_count = Some(4321);
	xing.file_size = Some(1_048_576);

	let frame_len = xing.write_to(&mut output).unwrap();

	// The cursor is ready for the first real audio frame
	let audio_start = output.stream_position().unwrap();
	assert_eq!(audio_start, tag_end + u64::from(frame_len));
	output.write_all(&[0xFF, 0xFB]).unwrap();

	let bytes = output.into_inner();

	// The synthetic frame starts with a legal MPEG-1 Layer III header
	let frame_start = tag_end as usize;
	assert_eq!(bytes[frame_start], 0xFF);
	assert_eq!(bytes[frame_start + 1], 0xFB);

	// VBR payload at the MPEG-1/stereo offset
	let payload = &bytes[frame_start + 36..];
	assert_eq!(&payload[..4], b"Xing");
	assert_eq!(&payload[4..8], &[0, 0, 0, 0x03]);
	assert_eq!(&payload[8..12], &4321_u32.to_be_bytes());
	assert_eq!(&payload[12..16], &1_048_576_u32.to_be_bytes());
}

#[test_log::test]
fn xing_failure_leaves_no_header_bytes() {
	let mut output = Cursor::new(vec![0_u8; 512]);

	// Reserved sampling-frequency index fails validation before any write
	let xing = XingFrame::new(MpegVersion::V2_5, Layer::Layer3, 3, ChannelMode::Stereo);
	assert!(xing.write_to(&mut output).is_err());

	assert_eq!(output.stream_position().unwrap(), 0);
	assert!(output.into_inner().iter().all(|&b| b == 0));
}
