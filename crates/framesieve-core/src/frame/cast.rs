use super::Frame;
use super::view::{FrameMut, FrameRef};

/// Reinterpret the start of `buf` as a `T` header.
///
/// Returns `None` when `buf` is shorter than `T::HEADER_LEN`. The header is
/// not validated; use [`frame_parse`](super::frame_parse) for that.
///
/// # Examples
/// ```
/// use framesieve_core::frame_cast;
/// use framesieve_core::protocols::udp::UdpHeader;
///
/// let bytes = [0x17, 0x70, 0x00, 0x35, 0x00, 0x08, 0x00, 0x00];
/// let header = frame_cast::<UdpHeader>(&bytes).unwrap();
/// assert_eq!(header.destination_port(), 53);
/// assert!(frame_cast::<UdpHeader>(&bytes[..7]).is_none());
/// ```
pub fn frame_cast<T: Frame>(buf: &[u8]) -> Option<&T> {
    split_ref::<T>(buf).map(|(header, _)| header)
}

/// Mutable counterpart of [`frame_cast`].
pub fn frame_cast_mut<T: Frame>(buf: &mut [u8]) -> Option<&mut T> {
    split_mut::<T>(buf).map(|(header, _)| header)
}

/// Unvalidated view; only the parse path may hand it out.
pub(crate) fn cast_ref<T: Frame>(buf: &[u8]) -> Option<FrameRef<'_, T>> {
    split_ref::<T>(buf).map(|(header, rest)| FrameRef::new(header, rest))
}

pub(crate) fn cast_mut<T: Frame>(buf: &mut [u8]) -> Option<FrameMut<'_, T>> {
    split_mut::<T>(buf).map(|(header, rest)| FrameMut::new(header, rest))
}

fn split_ref<T: Frame>(buf: &[u8]) -> Option<(&T, &[u8])> {
    T::ref_from_prefix(buf).ok()
}

fn split_mut<T: Frame>(buf: &mut [u8]) -> Option<(&mut T, &mut [u8])> {
    T::mut_from_prefix(buf).ok()
}
