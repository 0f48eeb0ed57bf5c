use std::fmt;

use tracing::trace;

use crate::frame::{CheckFrame, FrameRef};

/// Subscriber invoked once per decoded frame.
pub type Callback<T> = Box<dyn Fn(&FrameRef<'_, T>) + Send + Sync>;

/// Ordered, append-only subscriber registry for one frame type.
///
/// There is no removal and no deduplication: registering the same closure
/// twice invokes it twice.
pub struct BaseFilter<T> {
    callbacks: Vec<Callback<T>>,
}

impl<T: CheckFrame> BaseFilter<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub fn add_callback<F>(&mut self, callback: F)
    where
        F: Fn(&FrameRef<'_, T>) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Invoke every subscriber with `frame`, in registration order.
    ///
    /// A panicking subscriber unwinds through here; subscribers registered
    /// after it do not run for this frame.
    pub(crate) fn dispatch(&self, frame: &FrameRef<'_, T>) {
        trace!(
            frame = T::NAME,
            subscribers = self.callbacks.len(),
            "dispatching frame"
        );
        for callback in &self.callbacks {
            callback(frame);
        }
    }
}

impl<T: CheckFrame> Default for BaseFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CheckFrame> fmt::Debug for BaseFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseFilter")
            .field("frame", &T::NAME)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
