//! Synchsafe integers for ID3v2 size fields
//!
//! A synchsafe integer spreads its value across 4 bytes using only 7 bits per
//! byte, leaving the most significant bit of every byte clear. The resulting
//! byte sequence can never form the 11 set bits of an MPEG frame sync, so a
//! frame scanner skipping over tag data cannot be fooled by a size field.

use crate::error::Result;
use crate::macros::err;

/// An integer that can be converted to and from its synchsafe form
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` does not fit in 28 bits (is greater than `0x0FFF_FFFF`, ~256 MiB
	/// when used as a byte count)
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegtag::id3v2::SynchsafeInteger;
	///
	/// # fn main() -> mpegtag::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let synch_number = 0xFFF_FFFF_u32.synch()?;
	///
	/// // Each byte has 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0x7F7F_7F7F_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Revert a synchsafe integer to its original value
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegtag::id3v2::SynchsafeInteger;
	///
	/// # fn main() -> mpegtag::error::Result<()> {
	/// let synch_number = 0xFFF_FFFF_u32.synch()?;
	/// assert_eq!(synch_number.unsynch(), 0xFFF_FFFF_u32);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		// 7 usable bits per byte, 4 bytes
		const MAXIMUM_INTEGER: u32 = u32::MAX >> 4;

		if self > MAXIMUM_INTEGER {
			err!(TooMuchData);
		}

		Ok((self & 0x7F)
			| ((self & (0x7F << 7)) << 1)
			| ((self & (0x7F << 14)) << 2)
			| ((self & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3) | ((self & 0x7F_0000) >> 2) | ((self & 0x7F00) >> 1) | (self & 0x7F)
	}
}

#[cfg(test)]
mod tests {
	use super::SynchsafeInteger;

	use crate::error::ErrorKind;

	macro_rules! synchsafe_roundtrip_tests {
		($($name:ident => $value:literal);+ $(;)?) => {
			$(
				paste::paste! {
					#[test_log::test]
					fn [<roundtrip_ $name>]() {
						let synched = $value.synch().unwrap();
						for byte in synched.to_be_bytes() {
							assert_eq!(byte & 0x80, 0);
						}
						assert_eq!(synched.unsynch(), $value);
					}
				}
			)+
		};
	}

	synchsafe_roundtrip_tests! {
		zero      => 0_u32;
		small     => 0x7F_u32;
		one_carry => 0x80_u32;
		medium    => 0x3FFF_u32;
		large     => 0x0123_4567_u32;
		maximum   => 0x0FFF_FFFF_u32;
	}

	#[test_log::test]
	fn synch() {
		assert_eq!(0xFFF_FFFF_u32.synch().unwrap(), 0x7F7F_7F7F_u32);
		assert_eq!(0x80_u32.synch().unwrap(), 0x0100_u32);
	}

	#[test_log::test]
	fn synch_out_of_range() {
		let err = 0x1000_0000_u32.synch().unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TooMuchData));
	}

	#[test_log::test]
	fn unsynch() {
		assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0xFFF_FFFF_u32);
	}
}
