use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Color;

use crate::app::state::{App, CellPrompt};
use crate::model::engine;
use crate::ui::renderer::ViewMode;

impl App {
    /// Single-key command dispatch. `q` quits, `a` opens the add-cell prompt,
    /// `n` toggles the neighbor-count view, `r` reseeds; every other key
    /// advances one generation.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.running = false,
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.prompt = Some(CellPrompt {
                    buffer: String::new(),
                });
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.view_mode = self.view_mode.toggled();
                let label = match self.view_mode {
                    ViewMode::Cells => "cell view",
                    ViewMode::NeighborCounts => "neighbor count view",
                };
                self.log_event(label, Color::Cyan);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reseed(),
            _ => self.step(),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
            }
            KeyCode::Enter => {
                let Some(prompt) = self.prompt.take() else {
                    return;
                };
                match prompt.parse() {
                    Some((row, col)) => {
                        let before = self.grid.population();
                        self.grid = engine::add_cell(&self.grid, row, col);
                        if self.grid.population() == before {
                            // Out of range or already alive; both are fine.
                            self.log_event(format!("cell ({row}, {col}) unchanged"), Color::Yellow);
                        } else {
                            self.log_event(format!("cell ({row}, {col}) added"), Color::Green);
                        }
                    }
                    None => {
                        self.log_event("expected: row col", Color::Red);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' || c == '-' => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn step(&mut self) {
        self.grid = engine::evolve(&self.grid);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            population = self.grid.population(),
            "evolved"
        );
    }

    fn reseed(&mut self) {
        let world = &self.config.world;
        match engine::random_seed(world.height, world.width, world.density, &mut self.rng) {
            Ok(grid) => {
                self.grid = grid;
                self.generation = 0;
                self.log_event(
                    format!("reseeded at density {:.2}", world.density),
                    Color::Green,
                );
            }
            Err(e) => {
                // Configured density can be out of range; keep the old grid.
                self.log_event(e.to_string(), Color::Red);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crate::model::grid::Grid;
    use crossterm::event::KeyEvent;

    fn app_with_grid(grid: Grid) -> App {
        let config = AppConfig::default();
        let rng = App::rng_from_config(&config);
        App::new(grid, config, rng)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn q_quits() {
        let mut app = app_with_grid(Grid::new(5, 5));
        assert!(app.running);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn unbound_keys_advance_a_generation() {
        let mut grid = Grid::new(7, 7);
        // Blinker: flips orientation each step.
        grid.set(2, 3, true);
        grid.set(3, 3, true);
        grid.set(4, 3, true);
        let mut app = app_with_grid(grid);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.generation, 1);
        assert!(app.grid.get(3, 2) && app.grid.get(3, 3) && app.grid.get(3, 4));

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.generation, 2);
        assert!(app.grid.get(2, 3) && app.grid.get(3, 3) && app.grid.get(4, 3));
    }

    #[test]
    fn add_cell_prompt_round_trip() {
        let mut app = app_with_grid(Grid::new(6, 6));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.prompt.is_some());
        // While the prompt is open no key may trigger an evolve.
        type_str(&mut app, "2 3");
        assert_eq!(app.generation, 0);
        press(&mut app, KeyCode::Enter);
        assert!(app.prompt.is_none());
        assert!(app.grid.get(2, 3));
    }

    #[test]
    fn add_cell_prompt_accepts_out_of_range_coordinates() {
        let mut app = app_with_grid(Grid::new(6, 6));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "-1 0");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.grid.population(), 0);
        assert!(app.running);
    }

    #[test]
    fn escape_cancels_the_prompt() {
        let mut app = app_with_grid(Grid::new(6, 6));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "2 3");
        press(&mut app, KeyCode::Esc);
        assert!(app.prompt.is_none());
        assert_eq!(app.grid.population(), 0);
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn n_toggles_the_view_mode() {
        let mut app = app_with_grid(Grid::new(5, 5));
        assert_eq!(app.view_mode, ViewMode::Cells);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view_mode, ViewMode::NeighborCounts);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view_mode, ViewMode::Cells);
    }

    #[test]
    fn reseed_resets_the_generation_counter() {
        let mut app = app_with_grid(Grid::new(10, 10));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.generation, 1);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.generation, 0);
        assert_eq!(app.grid.height(), app.config.world.height);
        assert_eq!(app.grid.width(), app.config.world.width);
    }
}
