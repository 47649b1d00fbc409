//! WaveSeek - Console Demo
//!
//! Two text controls, `waveSeekBar` and `seekBar`, kept in sync by one
//! coordinator. Type `<control> <value>` to drag a control.
//!
//! Usage:
//!   cargo run -p waveseek-demo
//!   cargo run -p waveseek-demo -- --strict           # Reject out-of-range values
//!   cargo run -p waveseek-demo -- --config cfg.json  # Load coordinator settings
//!   cargo run -p waveseek-demo -- --no-log           # Skip tracing output

mod app;
mod command;
mod screen;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use command::{Command, CommandError};
use screen::SharedScreen;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if !args.contains(&"--no-log".to_string()) {
        waveseek_core::logging::init();
    }

    let config = app::config_from_args(&args)?;
    info!("Starting with {:?}", config);

    let screen = SharedScreen::default();
    let mut coordinator = app::build(config, &screen)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", screen.read().draw())?;

    for line in io::stdin().lock().lines() {
        let command = match line?.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match app::apply(&mut coordinator, &screen, command) {
            Ok(Some(_)) => writeln!(out, "{}", screen.read().draw())?,
            Ok(None) => {}
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}
