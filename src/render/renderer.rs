use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, PANEL_SIZE, PanelDisplay};
use crate::metrics::GameMetrics;

/// Numbers shown above the panels
pub struct Hud<'a> {
    pub state: &'a GameState,
    pub metrics: &'a GameMetrics,
    pub score: usize,
    pub high_score: usize,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, display: &PanelDisplay, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                     // Header
                Constraint::Length(PANEL_SIZE as u16 + 2), // Panels
                Constraint::Min(0),
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(hud), chunks[0]);

        // Two panels side by side, each 8 cells of 2 chars plus borders
        let panel_width = PANEL_SIZE as u16 * 2 + 2;
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(panel_width),
                Constraint::Length(panel_width),
                Constraint::Min(0),
            ])
            .split(chunks[1]);

        for panel in 0..2 {
            frame.render_widget(self.render_panel(display, panel), panels[panel + 1]);
        }

        frame.render_widget(self.render_controls(), chunks[3]);
    }

    /// Row 7 is drawn at the top since Up increases y
    fn render_panel(&self, display: &PanelDisplay, panel: usize) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..PANEL_SIZE)
            .rev()
            .map(|y| {
                let spans: Vec<Span> = (0..PANEL_SIZE)
                    .map(|x| {
                        if display.is_cell_lit(panel, x, y) {
                            Span::styled(
                                "● ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled("· ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", panel)),
        )
    }

    fn render_stats(&self, hud: &Hud) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(hud.state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Score: ", label),
            Span::styled(hud.score.to_string(), value),
            Span::raw("    "),
            Span::styled("High: ", label),
            Span::styled(hud.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Delay: ", label),
            Span::styled(format!("{}ms", hud.state.speed_delay_ms), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(hud.metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
