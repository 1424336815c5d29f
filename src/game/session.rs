use std::fmt;

use rand::Rng;
use tracing::{debug, info, trace};

use super::{
    action::{Direction, Turn},
    config::GameConfig,
    food::FoodSpawner,
    geometry::{Cell, Grid},
    snake::Snake,
};
use crate::input::InputListener;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Head left the grid horizontally
    XBreached,
    /// Head left the grid vertically
    YBreached,
    /// Head ran into the snake's own body
    SelfCollision,
    /// No free cell left to place food on
    BoardFilled,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            EndReason::XBreached => "X breached!",
            EndReason::YBreached => "Y breached!",
            EndReason::SelfCollision => "Self-collision!",
            EndReason::BoardFilled => "Board filled!",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Ended(EndReason),
}

/// Answer to the "play again?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDecision {
    Confirm,
    Decline,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session is not playing; nothing happened
    Idle,
    /// Snake moved and the session is still playing
    Advanced { ate_food: bool },
    /// This tick ended the session
    Ended(EndReason),
}

/// One game session: owns the snake, the food and the input subscription,
/// and drives the Playing/Ended state machine.
pub struct GameSession<R = rand::rngs::ThreadRng> {
    grid: Grid,
    snake: Snake,
    food: Cell,
    state: GameState,
    spawner: FoodSpawner<R>,
    listener: InputListener,
    ticks: u64,
}

impl GameSession<rand::rngs::ThreadRng> {
    /// Create a session and start the first game
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config.grid(), rand::thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        let mut session = Self {
            grid,
            snake: Snake::new(Cell::ORIGIN, Direction::Right),
            food: Cell::ORIGIN,
            state: GameState::Playing,
            spawner: FoodSpawner::with_rng(grid, rng),
            listener: InputListener::new(),
            ticks: 0,
        };
        session.start();
        session
    }

    /// Reset snake and food and begin listening for input
    pub fn start(&mut self) {
        self.snake = Snake::new(Cell::ORIGIN, Direction::Right);
        self.ticks = 0;
        self.state = GameState::Playing;
        self.listener.attach();

        match self.spawner.spawn(self.snake.cells()) {
            Some(food) => self.food = food,
            None => {
                self.end(EndReason::BoardFilled);
                return;
            }
        }

        info!(
            width = self.grid.width,
            height = self.grid.height,
            food_x = self.food.x,
            food_y = self.food.y,
            "session started"
        );
    }

    /// Advance the game by one tick. A no-op unless playing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }

        // Eating lengthens the snake on the same tick
        if self.snake.next_head() == self.food {
            self.snake.grow();
        }
        self.snake.advance();
        self.ticks += 1;

        let head = self.snake.head();
        trace!(tick = self.ticks, x = head.x, y = head.y, len = self.snake.len(), "tick");

        self.check_collisions()
    }

    /// Collision checks run in a fixed order: walls, body, food
    fn check_collisions(&mut self) -> TickOutcome {
        let head = self.snake.head();

        if !self.grid.contains_x(head.x) {
            return self.end(EndReason::XBreached);
        }
        if !self.grid.contains_y(head.y) {
            return self.end(EndReason::YBreached);
        }
        if self.snake.collides_with_body(head) {
            return self.end(EndReason::SelfCollision);
        }

        if head == self.food {
            match self.spawner.spawn(self.snake.cells()) {
                Some(food) => self.food = food,
                None => return self.end(EndReason::BoardFilled),
            }
            return TickOutcome::Advanced { ate_food: true };
        }

        TickOutcome::Advanced { ate_food: false }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.state = GameState::Ended(reason);
        self.listener.detach();
        info!(%reason, ticks = self.ticks, len = self.snake.len(), "session ended");
        TickOutcome::Ended(reason)
    }

    /// Steer the snake for the next tick. Ignored unless playing with the
    /// input listener attached. Returns whether the turn was applied.
    pub fn turn(&mut self, turn: Turn) -> bool {
        if self.state != GameState::Playing || !self.listener.is_attached() {
            return false;
        }
        self.snake.turn(turn);
        debug!(?turn, direction = ?self.snake.direction(), "turn");
        true
    }

    /// Apply the player's answer to the restart prompt. Only has an effect
    /// once the session has ended; returns true if a new game started.
    pub fn resolve_restart(&mut self, decision: RestartDecision) -> bool {
        let GameState::Ended(reason) = self.state else {
            return false;
        };

        match decision {
            RestartDecision::Confirm => {
                debug!(%reason, "restart confirmed");
                self.start();
                self.is_playing()
            }
            RestartDecision::Decline => {
                info!(%reason, "restart declined");
                false
            }
        }
    }

    /// Replace the snake, e.g. to set up a specific position
    pub fn place_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Move the food to a specific cell
    pub fn place_food(&mut self, food: Cell) {
        self.food = food;
    }
}

impl<R> GameSession<R> {
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn listener(&self) -> &InputListener {
        &self.listener
    }

    /// Ticks advanced since the current game started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
