// Shorthand for return Err(MpegTagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(MpegTagError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(MpegTagError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::MpegTagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::MpegTagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
