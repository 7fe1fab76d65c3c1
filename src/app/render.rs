use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::state::App;
use crate::ui::renderer::{GridWidget, ViewMode};

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let [grid_area, status_area, message_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());

        f.render_widget(
            GridWidget::new(&self.grid, self.view_mode, self.config.display.alive_glyph),
            grid_area,
        );

        let mode = match self.view_mode {
            ViewMode::Cells => "cells",
            ViewMode::NeighborCounts => "neighbors",
        };
        let status = Line::from(vec![
            Span::styled(
                format!(
                    " gen {}  pop {}  [{}] ",
                    self.generation,
                    self.grid.population(),
                    mode
                ),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                " q quit | a add cell | n counts | r reseed | any other key: evolve",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(status), status_area);

        let message = if let Some(prompt) = &self.prompt {
            Line::from(vec![
                Span::styled(" add cell (row col): ", Style::default().fg(Color::Yellow)),
                Span::raw(prompt.buffer.clone()),
                Span::styled("_", Style::default().fg(Color::Yellow)),
            ])
        } else if let Some((text, color)) = self.event_log.back() {
            Line::from(Span::styled(
                format!(" {text}"),
                Style::default().fg(*color),
            ))
        } else {
            Line::default()
        };
        f.render_widget(Paragraph::new(message), message_area);
    }
}
