pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::ui::tui::Tui;

impl App {
    /// The interactive loop: draw, block on the next terminal event, dispatch
    /// exactly one command, repeat. The simulation only moves when a key is
    /// pressed, so there is nothing to tick in the background.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        while self.running {
            tui.terminal.draw(|f| self.draw(f))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                // Resizes fall through to the redraw at the top of the loop.
                _ => {}
            }
        }
        Ok(())
    }
}
