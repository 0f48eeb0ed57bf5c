use std::fmt;

use tracing::debug;

use super::{BaseFilter, DecodeStage, Outcome};
use crate::frame::{CheckFrame, frame_parse};

/// Entry stage of a decode tree: decodes raw captured bytes.
pub struct RootFilter<T> {
    filter: BaseFilter<T>,
}

impl<T: CheckFrame> RootFilter<T> {
    pub fn new() -> Self {
        Self {
            filter: BaseFilter::new(),
        }
    }
}

impl<T: CheckFrame> Default for RootFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CheckFrame> DecodeStage for RootFilter<T> {
    type Frame = T;
    type Input<'a> = &'a [u8];

    fn filter(&self) -> &BaseFilter<T> {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut BaseFilter<T> {
        &mut self.filter
    }

    fn parse(&self, buf: &[u8]) -> Outcome {
        match frame_parse::<T>(buf) {
            Ok(frame) => {
                self.filter.dispatch(&frame);
                Outcome::Dispatched
            }
            Err(err) => {
                debug!(frame = T::NAME, error = %err, "dropping frame");
                Outcome::Rejected(err)
            }
        }
    }
}

impl<T: CheckFrame> fmt::Debug for RootFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootFilter")
            .field("filter", &self.filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_test::traced_test;

    use super::RootFilter;
    use crate::filter::{DecodeStage, Outcome};
    use crate::frame::ParseError;
    use crate::frame::testing::{OUTER_MAGIC, Outer};

    fn recording_root() -> (RootFilter<Outer>, Arc<Mutex<Vec<Vec<u8>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut root = RootFilter::<Outer>::new();
        let sink = Arc::clone(&seen);
        root.add_callback(move |frame| sink.lock().unwrap().push(frame.payload().to_vec()));
        (root, seen)
    }

    #[test]
    fn root_dispatches_valid_frame() {
        let (root, seen) = recording_root();
        let bytes = [OUTER_MAGIC, 0x00, 0x00, 0x02, 0x0a, 0x0b];
        assert_eq!(root.parse(&bytes), Outcome::Dispatched);
        assert_eq!(*seen.lock().unwrap(), vec![vec![0x0a, 0x0b]]);
    }

    #[test]
    fn root_drops_short_frame() {
        let (root, seen) = recording_root();
        let outcome = root.parse(&[OUTER_MAGIC, 0x00]);
        assert_eq!(
            outcome,
            Outcome::Rejected(ParseError::TooSmall {
                needed: 4,
                actual: 2
            })
        );
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn root_drops_invalid_frame() {
        let (root, seen) = recording_root();
        let outcome = root.parse(&[0x00, 0x00, 0x00, 0x00]);
        assert!(matches!(
            outcome,
            Outcome::Rejected(ParseError::ValidationFailed { frame: "outer" })
        ));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn root_without_subscribers_still_reports_outcome() {
        let root = RootFilter::<Outer>::default();
        assert!(root.parse(&[OUTER_MAGIC, 0, 0, 0]).is_dispatched());
        assert_eq!(root.filter().callback_count(), 0);
    }

    #[traced_test]
    #[test]
    fn root_logs_rejections() {
        let (root, _seen) = recording_root();
        let _ = root.parse(&[0x01]);
        assert!(logs_contain("dropping frame"));
        assert!(logs_contain("frame too small"));
    }
}
