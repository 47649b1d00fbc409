//! Render targets for progress updates

use std::fmt;

use crate::progress::Progress;

/// Unique name of a sink, e.g. `"seekBar"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SinkId(String);

impl SinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SinkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SinkId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can show a progress value.
///
/// Implementations are driven from the UI thread only; no `Send`/`Sync`
/// bound is required.
pub trait ProgressSink {
    /// Identity used for origin exclusion and duplicate detection
    fn id(&self) -> &SinkId;

    /// Show `progress`. Called synchronously by the coordinator.
    fn render(&mut self, progress: Progress);
}

/// Sink backed by a closure, for hosts that only have a setter to call
pub struct CallbackSink<F> {
    id: SinkId,
    on_render: F,
}

impl<F> CallbackSink<F>
where
    F: FnMut(Progress),
{
    pub fn new(id: impl Into<SinkId>, on_render: F) -> Self {
        Self {
            id: id.into(),
            on_render,
        }
    }
}

impl<F> ProgressSink for CallbackSink<F>
where
    F: FnMut(Progress),
{
    fn id(&self) -> &SinkId {
        &self.id
    }

    fn render(&mut self, progress: Progress) {
        (self.on_render)(progress)
    }
}

impl<F> fmt::Debug for CallbackSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").field("id", &self.id).finish()
    }
}
