use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::renderer::{COLUMNS_PER_CELL, Renderer, TerminalSurface};
use crate::game::{EndReason, GameSession};

/// What to show on top of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Waiting for the player to answer "play again?"
    RestartPrompt(EndReason),
    /// The player declined to restart
    GameOver(EndReason),
}

/// Lays out a full terminal frame around the board
pub struct Screen {
    renderer: Renderer,
}

impl Screen {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    pub fn render<R>(&self, frame: &mut Frame, session: &GameSession<R>, overlay: Overlay) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(session), chunks[0]);

        let board = self.board_area(chunks[1], session);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
            board,
        );

        let inner = board.inner(Margin::new(1, 1));
        let grid = session.grid();
        let mut surface = TerminalSurface::new(frame.buffer_mut(), inner, grid.cell_size);
        self.renderer.draw(
            &mut surface,
            session.snake().cells(),
            session.food(),
            grid.cell_size,
        );

        match overlay {
            Overlay::None => {}
            Overlay::RestartPrompt(reason) => {
                self.render_popup(frame, board, restart_prompt_lines(reason), Color::Yellow)
            }
            Overlay::GameOver(reason) => {
                self.render_popup(frame, board, game_over_lines(reason), Color::Red)
            }
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Centered rectangle sized to the grid plus its border, clipped to `area`
    fn board_area<R>(&self, area: Rect, session: &GameSession<R>) -> Rect {
        let grid = session.grid();
        let width = (grid.width as u16)
            .saturating_mul(COLUMNS_PER_CELL)
            .saturating_add(2);
        let height = (grid.height as u16).saturating_add(2);

        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        area
    }

    fn render_header<R>(&self, session: &GameSession<R>) -> Paragraph<'_> {
        let grid = session.grid();
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake().len().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Grid: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}x{}", grid.width, grid.height),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_popup(
        &self,
        frame: &mut Frame,
        board: Rect,
        lines: Vec<Line<'static>>,
        accent: Color,
    ) {
        let width = lines.iter().map(|line| line.width()).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;

        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(board);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            ),
            area,
        );
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("A/←", Style::default().fg(Color::Cyan)),
            Span::raw(" turn left | "),
            Span::styled("D/→", Style::default().fg(Color::Cyan)),
            Span::raw(" turn right | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn restart_prompt_lines(reason: EndReason) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Do you want to play again?"),
        Line::from(vec![
            Span::styled(
                "Y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "N",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" no", Style::default().fg(Color::Gray)),
        ]),
    ]
}

fn game_over_lines(reason: EndReason) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(reason.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Palette};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen() -> Screen {
        Screen::new(Renderer::new(Palette {
            snake: Color::Green,
            food: Color::Red,
        }))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_playing() {
        let session = GameSession::with_rng(Grid::new(10, 6, 10), StdRng::seed_from_u64(1));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal
            .draw(|frame| screen().render(frame, &session, Overlay::None))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Snake"));
        assert!(text.contains("Length: 1"));
        assert!(text.contains("█"));
    }

    #[test]
    fn test_render_restart_prompt() {
        let session = GameSession::with_rng(Grid::new(20, 10, 10), StdRng::seed_from_u64(2));
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();

        terminal
            .draw(|frame| {
                screen().render(
                    frame,
                    &session,
                    Overlay::RestartPrompt(EndReason::XBreached),
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("X breached!"));
        assert!(text.contains("Do you want to play again?"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let session = GameSession::with_rng(Grid::new(50, 40, 10), StdRng::seed_from_u64(3));
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();

        terminal
            .draw(|frame| {
                screen().render(frame, &session, Overlay::GameOver(EndReason::SelfCollision))
            })
            .unwrap();
    }
}
