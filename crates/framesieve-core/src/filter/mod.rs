//! Decode stages and callback dispatch.
//!
//! Filters are assembled once into a tree that mirrors protocol
//! encapsulation: a [`RootFilter`] consumes raw bytes, every
//! [`ChainedFilter`] consumes the payload of its parent layer. Each stage
//! owns an ordered list of subscribers and dispatches every frame it
//! decodes to all of them, depth first, in registration order.
//!
//! Rejected or inapplicable frames stop at the stage that rejected them.
//! [`DecodeStage::parse`] reports what happened as an [`Outcome`] instead
//! of an error, so nothing propagates past the stage.
//!
//! Registration needs `&mut` access and therefore ends before decoding
//! starts. Subscribers are `Send + Sync`, so a built tree can be shared by
//! threads decoding independent buffers.

use crate::frame::{CheckFrame, FrameRef, ParentMatch, ParseError};

mod base;
mod chained;
mod root;

pub use base::{BaseFilter, Callback};
pub use chained::ChainedFilter;
pub use root::RootFilter;

/// Result of one decode step at one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The frame was decoded and handed to every subscriber.
    Dispatched,
    /// The parent frame does not encapsulate this layer.
    NotApplicable,
    /// The frame was too small or failed validation and was dropped.
    Rejected(ParseError),
}

impl Outcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Outcome::Dispatched)
    }
}

/// Capability shared by root and chained stages.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use framesieve_core::{DecodeStage, RootFilter};
/// use framesieve_core::protocols::ethernet::EthernetHeader;
/// use framesieve_core::protocols::ipv4::Ipv4Header;
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let mut ethernet = RootFilter::<EthernetHeader>::new();
/// ethernet.chain::<Ipv4Header>(|ipv4| {
///     let seen = Arc::clone(&seen);
///     ipv4.add_callback(move |_| {
///         seen.fetch_add(1, Ordering::Relaxed);
///     });
/// });
///
/// // An ARP ethertype never reaches the IPv4 stage.
/// let mut frame = vec![0u8; 42];
/// frame[12..14].copy_from_slice(&0x0806u16.to_be_bytes());
/// assert!(ethernet.parse(&frame).is_dispatched());
/// assert_eq!(seen.load(Ordering::Relaxed), 0);
/// ```
pub trait DecodeStage {
    /// Frame type decoded by this stage.
    type Frame: CheckFrame;

    /// What the stage decodes from: raw bytes or a parent view.
    type Input<'a>;

    fn filter(&self) -> &BaseFilter<Self::Frame>;

    fn filter_mut(&mut self) -> &mut BaseFilter<Self::Frame>;

    /// Decode `input` and dispatch on success. Never fails.
    fn parse(&self, input: Self::Input<'_>) -> Outcome;

    /// Subscribe `callback` to every frame this stage decodes.
    fn add_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&FrameRef<'_, Self::Frame>) + Send + Sync + 'static,
    {
        self.filter_mut().add_callback(callback);
        self
    }

    /// Build a child stage for `C`, configure it with `setup`, and subscribe
    /// it to this stage.
    ///
    /// The child takes its place in the subscriber order at this call and
    /// stays bound to this stage for its whole life. This is the only way
    /// to obtain a chained stage, so every one of them has a parent.
    fn chain<C>(&mut self, setup: impl FnOnce(&mut ChainedFilter<C, Self::Frame>)) -> &mut Self
    where
        C: ParentMatch<Self::Frame>,
    {
        let mut child = ChainedFilter::new();
        setup(&mut child);
        self.filter_mut().add_callback(move |parent| {
            child.parse(parent);
        });
        self
    }
}
