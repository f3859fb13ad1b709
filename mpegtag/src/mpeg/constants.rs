// Bitrates in kbps, indexed by [version_index][layer_index][bitrate_index].
//
// Index 0 ("free format") and index 15 (invalid) are zero sentinels and are
// never selected for a Xing frame.
pub(super) const BITRATES: [[[u32; 16]; 3]; 2] = [
	// MPEG-1
	[
		[
			0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
		],
		[
			0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
		],
		[
			0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
		],
	],
	// MPEG-2 and MPEG-2.5
	[
		[
			0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
		],
		[0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
		[0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
	],
];

// Sample rates in Hz, indexed by [version as usize][sample_rate_index].
// Index 3 is reserved and handled before the lookup.
pub(super) const SAMPLE_RATES: [[u32; 3]; 3] = [
	[44100, 48000, 32000],
	[22050, 24000, 16000],
	[11025, 12000, 8000],
];

// Samples per frame, indexed by [layer_index][version_index]
pub(super) const SAMPLES: [[u16; 2]; 3] = [[384, 384], [1152, 1152], [1152, 576]];

// Size in bytes of the side information directly following the 4 frame
// header bytes, indexed by [version_index][channel_mode as usize]
pub(super) const SIDE_INFORMATION_SIZES: [[u32; 4]; 2] = [[32, 32, 32, 17], [17, 17, 17, 9]];

// The smallest frame able to hold the Xing payload: magic (4), flag word (4),
// frame count (4), file size (4), seek table (100), plus the frame header and
// the largest side-information region with some slack.
pub(super) const MIN_XING_FRAME_SIZE: u32 = 155;
