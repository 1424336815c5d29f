use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{EndReason, GameConfig, GameSession, RestartDecision, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Overlay, Renderer, Screen};

type Backend = CrosstermBackend<Stderr>;

/// Answer collected while the restart prompt is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptAnswer {
    Decision(RestartDecision),
    Quit,
}

impl PromptAnswer {
    fn from_key_action(action: &KeyAction) -> Option<Self> {
        match action {
            KeyAction::Confirm => Some(PromptAnswer::Decision(RestartDecision::Confirm)),
            KeyAction::Decline => Some(PromptAnswer::Decision(RestartDecision::Decline)),
            KeyAction::Quit => Some(PromptAnswer::Quit),
            KeyAction::Turn(_) | KeyAction::None => None,
        }
    }
}

/// What the loop does after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickResponse {
    /// The board changed
    Redraw,
    /// The game just ended; ask whether to play again
    PromptRestart(EndReason),
    /// Nothing to show
    Skip,
}

impl TickResponse {
    fn from_outcome(outcome: TickOutcome) -> Self {
        match outcome {
            TickOutcome::Advanced { .. } => TickResponse::Redraw,
            TickOutcome::Ended(reason) => TickResponse::PromptRestart(reason),
            TickOutcome::Idle => TickResponse::Skip,
        }
    }
}

/// Interactive play in the terminal
pub struct HumanMode {
    session: GameSession,
    screen: Screen,
    input_handler: InputHandler,
    tick_interval: Duration,
    overlay: Overlay,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let palette = config.palette().context("Invalid colour configuration")?;

        Ok(Self {
            session: GameSession::new(config),
            screen: Screen::new(Renderer::new(palette)),
            input_handler: InputHandler::new(),
            tick_interval: config.tick_interval(),
            overlay: Overlay::None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval_ms = self.tick_interval.as_millis() as u64, "game loop started");
        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    match TickResponse::from_outcome(self.session.tick()) {
                        TickResponse::Redraw => self.draw(terminal)?,
                        TickResponse::PromptRestart(reason) => {
                            self.on_game_over(terminal, &mut event_stream, reason).await?;
                            // The prompt may have taken a while; start the new game cleanly
                            tick_timer.reset();
                        }
                        TickResponse::Skip => {}
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("game loop stopped");
        Ok(())
    }

    /// Returns true if the frame needs redrawing
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return false;
                }
                self.apply_key_action(self.input_handler.handle_key_event(key));
                false
            }
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(turn) => {
                self.session.turn(turn);
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            // Prompt answers only count while the prompt is showing
            KeyAction::Confirm | KeyAction::Decline | KeyAction::None => {}
        }
    }

    async fn on_game_over(
        &mut self,
        terminal: &mut Terminal<Backend>,
        event_stream: &mut EventStream,
        reason: EndReason,
    ) -> Result<()> {
        self.overlay = Overlay::RestartPrompt(reason);
        self.draw(terminal)?;

        match self.await_restart_decision(terminal, event_stream).await? {
            PromptAnswer::Decision(decision) => {
                self.apply_restart_decision(decision, reason);
                self.draw(terminal)?;
            }
            PromptAnswer::Quit => self.should_quit = true,
        }

        Ok(())
    }

    fn apply_restart_decision(&mut self, decision: RestartDecision, reason: EndReason) {
        self.overlay = if self.session.resolve_restart(decision) {
            Overlay::None
        } else {
            Overlay::GameOver(reason)
        };
    }

    /// Wait for the player to answer the restart prompt. No ticks are
    /// processed in the meantime.
    async fn await_restart_decision(
        &mut self,
        terminal: &mut Terminal<Backend>,
        event_stream: &mut EventStream,
    ) -> Result<PromptAnswer> {
        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    let event = match maybe_event {
                        Some(event) => event.context("Failed to read terminal event")?,
                        None => return Ok(PromptAnswer::Quit),
                    };

                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let action = self.input_handler.handle_key_event(key);
                            if let Some(answer) = PromptAnswer::from_key_action(&action) {
                                debug!(?answer, "restart prompt answered");
                                return Ok(answer);
                            }
                        }
                        Event::Resize(..) => self.draw(terminal)?,
                        _ => {}
                    }
                }

                _ = tokio::signal::ctrl_c() => return Ok(PromptAnswer::Quit),
            }
        }
    }

    fn draw(&self, terminal: &mut Terminal<Backend>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.screen.render(frame, &self.session, self.overlay);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
