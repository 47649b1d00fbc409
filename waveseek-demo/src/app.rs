//! Startup and per-command dispatch for the console demo

use std::error::Error;

use tracing::warn;
use waveseek_core::{
    ConfigError, ControlEvent, CoordinatorConfig, Progress, ProgressCoordinator, ProgressError,
    ProgressSink, SinkId,
};

use crate::command::Command;
use crate::screen::{ConsoleBar, SharedScreen};

pub const WAVE_SEEK_BAR: &str = "waveSeekBar";
pub const SEEK_BAR: &str = "seekBar";

/// Config from `--config <path>`, then `--strict` on top
pub fn config_from_args(args: &[String]) -> Result<CoordinatorConfig, Box<dyn Error>> {
    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).ok_or("--config needs a path")?;
            CoordinatorConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => CoordinatorConfig::default(),
    };

    if args.iter().any(|a| a == "--strict") {
        return Ok(CoordinatorConfig::strict().with_initial(config.initial));
    }
    Ok(config)
}

/// Coordinator driving both bars on `screen`
pub fn build(
    config: CoordinatorConfig,
    screen: &SharedScreen,
) -> Result<ProgressCoordinator, ConfigError> {
    let sinks: Vec<Box<dyn ProgressSink>> = vec![
        Box::new(ConsoleBar::new(WAVE_SEEK_BAR, screen)),
        Box::new(ConsoleBar::new(SEEK_BAR, screen)),
    ];
    ProgressCoordinator::with_sinks(config, sinks)
}

/// Run one command. Returns the new value when the screen needs a redraw.
pub fn apply(
    coordinator: &mut ProgressCoordinator,
    screen: &SharedScreen,
    command: Command,
) -> Result<Option<Progress>, ProgressError> {
    match command {
        Command::Quit => Ok(None),
        Command::Set(value) => coordinator.set_progress(value).map(Some),
        Command::Drag { sink, value } => {
            if !coordinator.contains_sink(&sink) {
                warn!("No control named {}", sink);
                return Ok(None);
            }
            let id = SinkId::from(sink);
            let event = ControlEvent::ProgressChanged { value, from_user: true };
            let result = coordinator.handle_event(id.as_str(), event);
            // The dragged control already shows its own position
            if let Ok(Some(progress)) = result {
                screen.write().show(&id, progress);
            }
            result
        }
        Command::StartTracking(sink) => {
            coordinator.handle_event(&sink, ControlEvent::StartTracking)
        }
        Command::StopTracking(sink) => coordinator.handle_event(&sink, ControlEvent::StopTracking),
    }
}
