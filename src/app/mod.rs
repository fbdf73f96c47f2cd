pub mod help;
pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use biomapa_tui::Tui;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

impl App {
    /// Event loop: draw, poll input for one frame, repeat. The clock in
    /// the map header refreshes with the frame; the config file is
    /// re-checked every two seconds.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_config_check = Instant::now();

        while self.running {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            let frame = Duration::from_millis(1000 / self.config.ui.target_fps.max(1));
            if event::poll(frame)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    _ => {}
                }
            }

            if last_config_check.elapsed() >= Duration::from_secs(2) {
                if let Ok(true) = self.check_config_reload() {
                    tracing::info!("Configuration hot-reloaded successfully");
                }
                last_config_check = Instant::now();
            }
        }

        Ok(())
    }
}
