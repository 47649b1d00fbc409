//! Text rendering of the two linked controls

use std::sync::Arc;

use parking_lot::RwLock;
use waveseek_core::{Progress, ProgressSink, SinkId};

/// Number of cells in a drawn bar
const BAR_WIDTH: usize = 20;

/// Last value shown by each control, in registration order
#[derive(Debug, Default)]
pub struct Screen {
    rows: Vec<(SinkId, Progress)>,
}

pub type SharedScreen = Arc<RwLock<Screen>>;

impl Screen {
    /// Record what `id` is displaying
    pub fn show(&mut self, id: &SinkId, progress: Progress) {
        match self.rows.iter().position(|(row_id, _)| row_id == id) {
            Some(index) => self.rows[index].1 = progress,
            None => self.rows.push((id.clone(), progress)),
        }
    }

    /// Value currently displayed for `id`
    #[cfg(test)]
    pub fn shown(&self, id: &str) -> Option<Progress> {
        self.rows
            .iter()
            .find(|(row_id, _)| row_id.as_str() == id)
            .map(|(_, p)| *p)
    }

    /// One line per control, e.g. `waveSeekBar  [##########..........]  50`
    pub fn draw(&self) -> String {
        let width = self.rows.iter().map(|(id, _)| id.as_str().len()).max().unwrap_or(0);
        self.rows
            .iter()
            .map(|(id, progress)| {
                format!("{:<width$}  [{}]  {:>3}", id.as_str(), bar(*progress), progress)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn bar(progress: Progress) -> String {
    let filled = (progress.fraction() * BAR_WIDTH as f32).round() as usize;
    let mut out = "#".repeat(filled);
    out.push_str(&".".repeat(BAR_WIDTH - filled));
    out
}

/// A control drawn as a row on the shared screen
pub struct ConsoleBar {
    id: SinkId,
    screen: SharedScreen,
}

impl ConsoleBar {
    pub fn new(id: &str, screen: &SharedScreen) -> Self {
        Self {
            id: SinkId::from(id),
            screen: Arc::clone(screen),
        }
    }
}

impl ProgressSink for ConsoleBar {
    fn id(&self) -> &SinkId {
        &self.id
    }

    fn render(&mut self, progress: Progress) {
        self.screen.write().show(&self.id, progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill() {
        assert_eq!(bar(Progress::MIN), "....................");
        assert_eq!(bar(Progress::MAX), "####################");
        assert_eq!(bar(Progress::DEFAULT), "##########..........");
    }

    #[test]
    fn test_console_bar_updates_row() {
        let screen = SharedScreen::default();
        let mut wave = ConsoleBar::new("waveSeekBar", &screen);
        let mut seek = ConsoleBar::new("seekBar", &screen);

        wave.render(Progress::DEFAULT);
        seek.render(Progress::DEFAULT);
        seek.render(Progress::clamped(75));

        let screen = screen.read();
        assert_eq!(screen.shown("waveSeekBar"), Some(Progress::DEFAULT));
        assert_eq!(screen.shown("seekBar").map(Progress::value), Some(75));
        assert_eq!(screen.draw().lines().count(), 2);
        assert!(screen.draw().starts_with("waveSeekBar  [##########"));
    }
}
