use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::style::Color;
use std::collections::VecDeque;

use crate::model::config::AppConfig;
use crate::model::grid::Grid;
use crate::ui::renderer::ViewMode;

const EVENT_LOG_CAP: usize = 5;

/// In-progress "add cell" coordinate entry.
pub struct CellPrompt {
    pub buffer: String,
}

impl CellPrompt {
    /// Parses the buffer as a `row col` (or `row,col`) pair. Anything that is
    /// not two integers is `None`; out-of-range values are left to the
    /// engine's permissive `add_cell` contract.
    pub fn parse(&self) -> Option<(i32, i32)> {
        let mut parts = self
            .buffer
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some((row, col))
    }
}

pub struct App {
    pub running: bool,
    pub grid: Grid,
    pub generation: u64,
    pub view_mode: ViewMode,
    pub prompt: Option<CellPrompt>,
    pub config: AppConfig,
    pub rng: ChaCha8Rng,
    pub event_log: VecDeque<(String, Color)>,
}

impl App {
    pub fn new(grid: Grid, config: AppConfig, rng: ChaCha8Rng) -> Self {
        Self {
            running: true,
            grid,
            generation: 0,
            view_mode: ViewMode::Cells,
            prompt: None,
            config,
            rng,
            event_log: VecDeque::new(),
        }
    }

    /// RNG for the app: seeded from config when a seed is set, from OS
    /// entropy otherwise.
    pub fn rng_from_config(config: &AppConfig) -> ChaCha8Rng {
        match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    pub fn log_event(&mut self, message: impl Into<String>, color: Color) {
        self.event_log.push_back((message.into(), color));
        while self.event_log.len() > EVENT_LOG_CAP {
            self.event_log.pop_front();
        }
    }
}
