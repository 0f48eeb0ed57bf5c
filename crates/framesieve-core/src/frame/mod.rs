//! Typed, zero-copy frame views.
//!
//! A frame type is a fixed-size header overlay (`#[repr(C)]`, alignment 1)
//! described by three traits:
//! - [`Frame`]: the header layout and where its payload lives
//! - [`CheckFrame`]: structural validation beyond the size check
//! - [`ParentMatch`]: whether a parent frame encapsulates this type
//!
//! Decoding is split into a size-only cast (`cast`) and a parse that adds
//! validation (`parse`). Views are only ever handed out by a successful
//! parse, so a caller never observes a header that failed validation.

use std::ops::Range;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

pub mod cast;
pub mod error;
pub mod parse;
pub mod view;

pub use cast::{frame_cast, frame_cast_mut};
pub use error::ParseError;
pub use parse::{frame_parse, frame_parse_mut};
pub use view::{FrameMut, FrameRef};

/// Fixed-size header layout of one protocol layer.
///
/// The header is read in place from the start of the buffer. Everything
/// after it is the frame body; [`Frame::payload_bounds`] selects the part of
/// that body which the next layer decodes.
pub trait Frame: FromBytes + IntoBytes + KnownLayout + Immutable + Unaligned + Sized + 'static {
    /// Short lowercase protocol name used in logs and errors.
    const NAME: &'static str;

    /// Size of the fixed header in bytes.
    const HEADER_LEN: usize = size_of::<Self>();

    /// Payload range relative to the start of a frame of `frame_len` bytes.
    ///
    /// Views clamp the result into `HEADER_LEN..frame_len`, so an
    /// implementation may return declared lengths without checking them.
    fn payload_bounds(&self, frame_len: usize) -> Range<usize> {
        Self::HEADER_LEN..frame_len
    }
}

/// Structural validation of a frame that is already large enough.
///
/// Returning `false` rejects the frame exactly like a failed size check;
/// it is a normal outcome, not an exceptional one.
pub trait CheckFrame: Frame {
    fn check_frame(frame: &FrameRef<'_, Self>) -> bool;
}

/// Encapsulation rule between a frame type and its parent layer.
///
/// Consulted before the payload of `P` is parsed as `Self`. A `false`
/// result means "this layer does not apply", never an error.
pub trait ParentMatch<P: Frame>: CheckFrame {
    fn parent_match(parent: &FrameRef<'_, P>) -> bool;
}
