//! Progress coordinator
//!
//! Owns the one authoritative progress value and pushes every change to
//! the registered sinks, skipping the sink a change came from so a control
//! is never told about its own drag.
//!
//! The coordinator is single-owner and not thread-safe. All mutation goes
//! through `&mut self`, which also means a sink cannot call back into the
//! coordinator while it is rendering.

use tracing::{debug, trace, warn};

use crate::config::{ConfigError, CoordinatorConfig};
use crate::progress::{Progress, ProgressError, RangePolicy};
use crate::sink::{ProgressSink, SinkId};

/// Something a control reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The control's value moved
    ProgressChanged { value: i32, from_user: bool },
    /// Finger went down on the control
    StartTracking,
    /// Finger lifted
    StopTracking,
}

/// Keeps a set of sinks in sync with one progress value
pub struct ProgressCoordinator {
    progress: Progress,
    policy: RangePolicy,
    /// Registration order is render order
    sinks: Vec<Box<dyn ProgressSink>>,
}

impl ProgressCoordinator {
    /// Create a coordinator with no sinks
    pub fn new(config: CoordinatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            progress: config.initial_progress()?,
            policy: config.policy,
            sinks: Vec::new(),
        })
    }

    /// Create a coordinator and register `sinks` in order.
    /// Each sink renders the initial value as it is registered.
    pub fn with_sinks<I>(config: CoordinatorConfig, sinks: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Box<dyn ProgressSink>>,
    {
        let mut coordinator = Self::new(config)?;
        for sink in sinks {
            coordinator.register_sink(sink);
        }
        Ok(coordinator)
    }

    /// Current authoritative value
    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn contains_sink(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Registered sink ids in render order
    pub fn sink_ids(&self) -> Vec<&SinkId> {
        self.sinks.iter().map(|s| s.id()).collect()
    }

    /// Add a sink and bring it up to date with the current value.
    ///
    /// A sink whose id is already registered replaces the old one in place.
    pub fn register_sink(&mut self, mut sink: Box<dyn ProgressSink>) {
        sink.render(self.progress);
        match self.position(sink.id().as_str()) {
            Some(index) => {
                debug!("Replacing sink {}", sink.id());
                self.sinks[index] = sink;
            }
            None => {
                debug!("Registered sink {}", sink.id());
                self.sinks.push(sink);
            }
        }
    }

    /// Set the value programmatically. Every sink renders the result.
    pub fn set_progress(&mut self, value: i32) -> Result<Progress, ProgressError> {
        self.apply(value, None)
    }

    /// A control reports a user-driven change. Every sink except `sink_id`
    /// renders the result.
    pub fn on_user_change(&mut self, sink_id: &str, value: i32) -> Result<Progress, ProgressError> {
        let progress = self.apply(value, Some(sink_id))?;
        debug!("Progress : {} (from {})", progress, sink_id);
        Ok(progress)
    }

    /// Dispatch a raw control event.
    ///
    /// Returns the new value when the event changed it. Non-user progress
    /// changes are echoes of our own renders and are dropped.
    pub fn handle_event(
        &mut self,
        sink_id: &str,
        event: ControlEvent,
    ) -> Result<Option<Progress>, ProgressError> {
        match event {
            ControlEvent::ProgressChanged { value, from_user: true } => {
                self.on_user_change(sink_id, value).map(Some)
            }
            ControlEvent::ProgressChanged { value, from_user: false } => {
                trace!("Ignoring programmatic change {} on {}", value, sink_id);
                Ok(None)
            }
            ControlEvent::StartTracking | ControlEvent::StopTracking => {
                trace!("{:?} on {}", event, sink_id);
                Ok(None)
            }
        }
    }

    fn apply(&mut self, value: i32, origin: Option<&str>) -> Result<Progress, ProgressError> {
        let progress = self.policy.apply(value).map_err(|e| {
            warn!("Rejected progress: {}", e);
            e
        })?;
        self.progress = progress;
        self.propagate(origin);
        Ok(progress)
    }

    fn propagate(&mut self, origin: Option<&str>) {
        let progress = self.progress;
        for sink in self
            .sinks
            .iter_mut()
            .filter(|s| origin != Some(s.id().as_str()))
        {
            sink.render(progress);
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sinks.iter().position(|s| s.id().as_str() == id)
    }
}

impl std::fmt::Debug for ProgressCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressCoordinator")
            .field("progress", &self.progress)
            .field("policy", &self.policy)
            .field("sinks", &self.sink_ids())
            .finish()
    }
}
