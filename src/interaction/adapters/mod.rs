//! Listener implementations.

mod logging;
mod recording;

pub use logging::TracingListener;
pub use recording::RecordingListener;
