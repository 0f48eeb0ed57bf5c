use super::CheckFrame;
use super::cast::{cast_mut, cast_ref};
use super::error::ParseError;
use super::view::{FrameMut, FrameRef};

/// Cast `buf` to a `T` frame and validate it.
///
/// # Errors
/// - [`ParseError::TooSmall`] when `buf` cannot hold the fixed header.
/// - [`ParseError::ValidationFailed`] when [`CheckFrame::check_frame`]
///   rejects the frame.
///
/// # Examples
/// ```
/// use framesieve_core::{ParseError, frame_parse};
/// use framesieve_core::protocols::udp::UdpHeader;
///
/// let datagram = [0x17, 0x70, 0x00, 0x35, 0x00, 0x0a, 0x00, 0x00, 0xde, 0xad];
/// let udp = frame_parse::<UdpHeader>(&datagram).unwrap();
/// assert_eq!(udp.payload(), &[0xde, 0xad]);
///
/// let err = frame_parse::<UdpHeader>(&datagram[..4]).unwrap_err();
/// assert_eq!(err, ParseError::TooSmall { needed: 8, actual: 4 });
/// ```
pub fn frame_parse<T: CheckFrame>(buf: &[u8]) -> Result<FrameRef<'_, T>, ParseError> {
    let frame = cast_ref::<T>(buf).ok_or(ParseError::TooSmall {
        needed: T::HEADER_LEN,
        actual: buf.len(),
    })?;
    if !T::check_frame(&frame) {
        return Err(ParseError::ValidationFailed { frame: T::NAME });
    }
    Ok(frame)
}

/// Mutable counterpart of [`frame_parse`].
///
/// Validation runs against a read-only view of the same bytes, so a frame
/// accepted here is accepted by [`frame_parse`] as well.
///
/// # Errors
/// Same as [`frame_parse`].
pub fn frame_parse_mut<T: CheckFrame>(buf: &mut [u8]) -> Result<FrameMut<'_, T>, ParseError> {
    let actual = buf.len();
    let frame = cast_mut::<T>(buf).ok_or(ParseError::TooSmall {
        needed: T::HEADER_LEN,
        actual,
    })?;
    if !T::check_frame(&frame.as_frame_ref()) {
        return Err(ParseError::ValidationFailed { frame: T::NAME });
    }
    Ok(frame)
}
