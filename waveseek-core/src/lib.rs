//! WaveSeek - Core Library
//!
//! Keeps several progress controls (a wave seek bar, a plain seek bar, ...)
//! showing the same 0-100 value. One [`ProgressCoordinator`] owns the value;
//! controls implement [`ProgressSink`] to be told about changes and report
//! their own drags back through [`ProgressCoordinator::on_user_change`].

pub mod config;
pub mod coordinator;
pub mod logging;
pub mod progress;
pub mod sink;

// Re-exports for convenience
pub use config::{ConfigError, CoordinatorConfig};
pub use coordinator::{ControlEvent, ProgressCoordinator};
pub use progress::{Progress, ProgressError, RangePolicy};
pub use sink::{CallbackSink, ProgressSink, SinkId};
