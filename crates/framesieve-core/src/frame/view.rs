use std::fmt;
use std::ops::{Deref, DerefMut, Range};

use super::Frame;

/// Validated, read-only view of one frame inside a borrowed buffer.
///
/// Dereferences to the header type. The view is `Copy` and lives no longer
/// than the buffer it was parsed from.
pub struct FrameRef<'a, T> {
    header: &'a T,
    body: &'a [u8],
}

impl<T> Clone for FrameRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FrameRef<'_, T> {}

impl<'a, T: Frame> FrameRef<'a, T> {
    pub(crate) fn new(header: &'a T, body: &'a [u8]) -> Self {
        Self { header, body }
    }

    /// The typed header, with the buffer's lifetime.
    pub fn header(&self) -> &'a T {
        self.header
    }

    /// Raw bytes of the fixed header.
    pub fn header_bytes(&self) -> &'a [u8] {
        self.header.as_bytes()
    }

    /// Bytes following the fixed header, up to the end of the buffer.
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// Total length of the buffer the frame was parsed from.
    pub fn frame_len(&self) -> usize {
        T::HEADER_LEN + self.body.len()
    }

    /// Payload range relative to the start of the frame.
    pub fn payload_range(&self) -> Range<usize> {
        clamp_payload(
            self.header.payload_bounds(self.frame_len()),
            self.frame_len(),
            T::HEADER_LEN,
        )
    }

    /// Payload bytes handed to the next layer.
    pub fn payload(&self) -> &'a [u8] {
        let range = body_range::<T>(self.payload_range());
        &self.body[range]
    }
}

impl<T> Deref for FrameRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.header
    }
}

impl<T: Frame> fmt::Debug for FrameRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameRef")
            .field("frame", &T::NAME)
            .field("frame_len", &self.frame_len())
            .field("payload", &self.payload_range())
            .finish()
    }
}

/// Validated, writable view of one frame inside a borrowed buffer.
///
/// Header and body are disjoint borrows of the same buffer, so both can be
/// edited in place. Payload bounds are recomputed from the header on every
/// call and follow any length field changes.
pub struct FrameMut<'a, T> {
    header: &'a mut T,
    body: &'a mut [u8],
}

impl<'a, T: Frame> FrameMut<'a, T> {
    pub(crate) fn new(header: &'a mut T, body: &'a mut [u8]) -> Self {
        Self { header, body }
    }

    pub fn header(&self) -> &T {
        &*self.header
    }

    pub fn header_mut(&mut self) -> &mut T {
        &mut *self.header
    }

    pub fn body(&self) -> &[u8] {
        &*self.body
    }

    pub fn body_mut(&mut self) -> &mut [u8] {
        &mut *self.body
    }

    pub fn frame_len(&self) -> usize {
        T::HEADER_LEN + self.body.len()
    }

    pub fn payload_range(&self) -> Range<usize> {
        clamp_payload(
            self.header.payload_bounds(self.frame_len()),
            self.frame_len(),
            T::HEADER_LEN,
        )
    }

    pub fn payload(&self) -> &[u8] {
        let range = body_range::<T>(self.payload_range());
        &self.body[range]
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        let range = body_range::<T>(self.payload_range());
        &mut self.body[range]
    }

    /// Read-only view of the same bytes, borrowed from this one.
    pub fn as_frame_ref(&self) -> FrameRef<'_, T> {
        FrameRef::new(&*self.header, &*self.body)
    }

    /// Give up write access and keep a read-only view for the whole lifetime.
    pub fn into_frame_ref(self) -> FrameRef<'a, T> {
        FrameRef::new(self.header, self.body)
    }
}

impl<T> Deref for FrameMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.header
    }
}

impl<T> DerefMut for FrameMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.header
    }
}

impl<T: Frame> fmt::Debug for FrameMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameMut")
            .field("frame", &T::NAME)
            .field("frame_len", &self.frame_len())
            .field("payload", &self.payload_range())
            .finish()
    }
}

/// Clamp declared payload bounds into `header_len..frame_len`.
fn clamp_payload(bounds: Range<usize>, frame_len: usize, header_len: usize) -> Range<usize> {
    let end = bounds.end.clamp(header_len, frame_len);
    let start = bounds.start.clamp(header_len, end);
    start..end
}

/// Translate a frame-relative range into a body-relative one.
fn body_range<T: Frame>(range: Range<usize>) -> Range<usize> {
    (range.start - T::HEADER_LEN)..(range.end - T::HEADER_LEN)
}

#[cfg(test)]
mod tests {
    use super::clamp_payload;
    use crate::frame::cast::{cast_mut, cast_ref};
    use crate::frame::testing::{Inner, Outer};

    #[test]
    fn clamp_keeps_valid_bounds() {
        assert_eq!(clamp_payload(4..8, 10, 4), 4..8);
    }

    #[test]
    fn clamp_truncates_declared_length() {
        assert_eq!(clamp_payload(4..300, 10, 4), 4..10);
    }

    #[test]
    fn clamp_never_starts_inside_header() {
        assert_eq!(clamp_payload(0..2, 10, 4), 4..4);
        assert_eq!(clamp_payload(12..20, 10, 4), 10..10);
    }

    #[test]
    fn payload_defaults_to_rest_of_buffer() {
        let bytes = [1u8, 0, 9, 8, 7];
        let frame = cast_ref::<Inner>(&bytes).unwrap();
        assert_eq!(frame.frame_len(), 5);
        assert_eq!(frame.payload(), &[9, 8, 7]);
        assert_eq!(frame.payload().as_ptr(), bytes[2..].as_ptr());
    }

    #[test]
    fn payload_follows_declared_length() {
        let bytes = [0xA5, 0x01, 0x00, 0x02, 0xAA, 0xBB, 0xCC];
        let frame = cast_ref::<Outer>(&bytes).unwrap();
        assert_eq!(frame.payload_range(), 4..6);
        assert_eq!(frame.payload(), &[0xAA, 0xBB]);
        assert_eq!(frame.body(), &[0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn payload_is_clamped_to_buffer() {
        let bytes = [0xA5, 0x01, 0xFF, 0xFF, 0xAA];
        let frame = cast_ref::<Outer>(&bytes).unwrap();
        assert_eq!(frame.payload(), &[0xAA]);
    }

    #[test]
    fn mutable_view_edits_header_and_payload() {
        let mut bytes = [0xA5, 0x01, 0x00, 0x01, 0x10, 0x20];
        let mut frame = cast_mut::<Outer>(&mut bytes).unwrap();
        frame.next = 0x02;
        frame.payload_mut()[0] = 0x11;
        frame.body_len.set(2);
        assert_eq!(frame.payload(), &[0x11, 0x20]);
        assert_eq!(frame.as_frame_ref().payload_range(), 4..6);
        assert_eq!(bytes, [0xA5, 0x02, 0x00, 0x02, 0x11, 0x20]);
    }

    #[test]
    fn header_bytes_cover_fixed_header() {
        let bytes = [0xA5, 0x01, 0x00, 0x00, 0xEE];
        let frame = cast_ref::<Outer>(&bytes).unwrap();
        assert_eq!(frame.header_bytes(), &bytes[..4]);
    }
}
