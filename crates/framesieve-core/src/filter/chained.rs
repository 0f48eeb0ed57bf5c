use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use super::{BaseFilter, DecodeStage, Outcome};
use crate::frame::{Frame, FrameRef, ParentMatch, frame_parse};

/// Stage decoding `T` from the payload of a parent `P` frame.
///
/// Only [`DecodeStage::chain`] builds one, and it subscribes the new stage
/// to its parent in the same step. The parent owns it from then on.
pub struct ChainedFilter<T, P> {
    filter: BaseFilter<T>,
    parent: PhantomData<fn(&P)>,
}

impl<T: ParentMatch<P>, P: Frame> ChainedFilter<T, P> {
    pub(crate) fn new() -> Self {
        Self {
            filter: BaseFilter::new(),
            parent: PhantomData,
        }
    }
}

impl<T: ParentMatch<P>, P: Frame> DecodeStage for ChainedFilter<T, P> {
    type Frame = T;
    type Input<'a> = &'a FrameRef<'a, P>;

    fn filter(&self) -> &BaseFilter<T> {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut BaseFilter<T> {
        &mut self.filter
    }

    fn parse(&self, parent: Self::Input<'_>) -> Outcome {
        if !T::parent_match(parent) {
            trace!(frame = T::NAME, parent = P::NAME, "parent does not encapsulate frame");
            return Outcome::NotApplicable;
        }
        match frame_parse::<T>(parent.payload()) {
            Ok(frame) => {
                self.filter.dispatch(&frame);
                Outcome::Dispatched
            }
            Err(err) => {
                debug!(frame = T::NAME, parent = P::NAME, error = %err, "dropping frame");
                Outcome::Rejected(err)
            }
        }
    }
}

impl<T: ParentMatch<P>, P: Frame> fmt::Debug for ChainedFilter<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedFilter")
            .field("parent", &P::NAME)
            .field("filter", &self.filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::ChainedFilter;
    use crate::filter::{DecodeStage, Outcome, RootFilter};
    use crate::frame::testing::{Inner, NEXT_INNER, OUTER_MAGIC, Outer};
    use crate::frame::{ParseError, frame_parse};

    fn inner_filter(seen: &Arc<Mutex<Vec<u8>>>) -> ChainedFilter<Inner, Outer> {
        let mut filter = ChainedFilter::<Inner, Outer>::new();
        let sink = Arc::clone(seen);
        filter.add_callback(move |frame| sink.lock().unwrap().push(frame.kind));
        filter
    }

    #[test]
    fn chained_dispatches_matching_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let filter = inner_filter(&seen);
        let bytes = [OUTER_MAGIC, NEXT_INNER, 0x00, 0x02, 0x07, 0x00];
        let parent = frame_parse::<Outer>(&bytes).unwrap();

        assert_eq!(filter.parse(&parent), Outcome::Dispatched);
        assert_eq!(*seen.lock().unwrap(), vec![0x07]);
    }

    #[test]
    fn chained_skips_unmatched_parent() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let filter = inner_filter(&seen);
        let bytes = [OUTER_MAGIC, 0x09, 0x00, 0x02, 0x07, 0x00];
        let parent = frame_parse::<Outer>(&bytes).unwrap();

        assert_eq!(filter.parse(&parent), Outcome::NotApplicable);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn chained_rejects_short_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let filter = inner_filter(&seen);
        // Declared body is one byte; the trailing byte is outside the payload.
        let bytes = [OUTER_MAGIC, NEXT_INNER, 0x00, 0x01, 0x07, 0x00];
        let parent = frame_parse::<Outer>(&bytes).unwrap();

        assert_eq!(
            filter.parse(&parent),
            Outcome::Rejected(ParseError::TooSmall {
                needed: 2,
                actual: 1
            })
        );
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn chained_rejects_invalid_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let filter = inner_filter(&seen);
        let bytes = [OUTER_MAGIC, NEXT_INNER, 0x00, 0x02, 0x00, 0x00];
        let parent = frame_parse::<Outer>(&bytes).unwrap();

        assert!(matches!(
            filter.parse(&parent),
            Outcome::Rejected(ParseError::ValidationFailed { frame: "inner" })
        ));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn chain_keeps_parent_subscriber_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut root = RootFilter::<Outer>::new();

        let sink = Arc::clone(&order);
        root.add_callback(move |_| sink.lock().unwrap().push("outer-first"));
        let sink = Arc::clone(&order);
        root.chain::<Inner>(|inner| {
            inner.add_callback(move |_| sink.lock().unwrap().push("inner"));
        });
        let sink = Arc::clone(&order);
        root.add_callback(move |_| sink.lock().unwrap().push("outer-last"));

        let bytes = [OUTER_MAGIC, NEXT_INNER, 0x00, 0x02, 0x01, 0x00];
        assert!(root.parse(&bytes).is_dispatched());
        assert_eq!(
            *order.lock().unwrap(),
            vec!["outer-first", "inner", "outer-last"]
        );
        assert_eq!(root.filter().callback_count(), 3);
    }

    #[test]
    fn chained_stage_receives_frames_once_built() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut root = RootFilter::<Outer>::new();
        let sink = Arc::clone(&seen);
        root.chain::<Inner>(move |inner| {
            inner.add_callback(move |frame| sink.lock().unwrap().push(frame.kind));
        });

        let bytes = [OUTER_MAGIC, NEXT_INNER, 0x00, 0x02, 0x05, 0x00];
        assert!(root.parse(&bytes).is_dispatched());
        assert!(root.parse(&bytes).is_dispatched());
        assert_eq!(*seen.lock().unwrap(), vec![0x05, 0x05]);
    }
}
