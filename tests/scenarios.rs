use grid_snake::game::{
    Cell, Direction, EndReason, GameConfig, GameSession, GameState, Grid, Snake, TickOutcome, Turn,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CELL_SIZE: u32 = 10;

fn session(seed: u64) -> GameSession<StdRng> {
    let config = GameConfig::default();
    GameSession::with_rng(config.grid(), StdRng::seed_from_u64(seed))
}

fn px(x: i32, y: i32) -> Cell {
    Cell::from_pixels(x, y, CELL_SIZE)
}

fn snake_px(cells: &[(i32, i32)], direction: Direction) -> Snake {
    Snake::from_cells(cells.iter().map(|&(x, y)| px(x, y)), direction).unwrap()
}

#[test]
fn fresh_session_moves_one_cell_right() {
    let mut session = session(1);
    assert_eq!(session.grid(), Grid::new(50, 40, 10));
    assert_eq!(session.snake().head().to_pixels(CELL_SIZE), (0, 0));
    // Keep the food out of the way
    session.place_food(px(300, 300));

    session.tick();

    assert_eq!(session.snake().head().to_pixels(CELL_SIZE), (10, 0));
    assert_eq!(session.snake().len(), 1);
    assert!(session.is_playing());
}

#[test]
fn eating_food_grows_snake_and_relocates_food() {
    let mut session = session(2);
    session.place_snake(snake_px(&[(0, 0), (10, 0), (20, 0)], Direction::Right));
    session.place_food(px(30, 0));

    let outcome = session.tick();

    assert_eq!(outcome, TickOutcome::Advanced { ate_food: true });
    assert_eq!(session.snake().len(), 4);
    assert_eq!(session.snake().head().to_pixels(CELL_SIZE), (30, 0));
    let food = session.food();
    assert!(session.snake().cells().all(|cell| *cell != food));
}

#[test]
fn moving_left_from_origin_breaches_x() {
    let mut session = session(3);
    session.place_snake(snake_px(&[(0, 0)], Direction::Left));

    let outcome = session.tick();

    assert_eq!(session.snake().head().to_pixels(CELL_SIZE), (-10, 0));
    assert_eq!(outcome, TickOutcome::Ended(EndReason::XBreached));
    assert_eq!(session.state(), GameState::Ended(EndReason::XBreached));
}

#[test]
fn reversing_into_third_segment_is_self_collision() {
    let mut session = session(4);
    session.place_food(px(300, 300));
    session.place_snake(snake_px(
        &[(0, 0), (10, 0), (20, 0), (30, 0)],
        Direction::Right,
    ));

    // No reversal guard: two right turns point the head back into the body
    assert!(session.turn(Turn::Right));
    assert!(session.turn(Turn::Right));
    assert_eq!(session.snake().next_head(), px(20, 0));

    let outcome = session.tick();

    assert_eq!(outcome, TickOutcome::Ended(EndReason::SelfCollision));
    assert!(!session.is_playing());
}

#[test]
fn head_past_right_pixel_extent_ends_session() {
    let mut session = session(6);
    let (extent_x, _) = session.grid().pixel_extent();
    session.place_snake(snake_px(&[(extent_x as i32, 50)], Direction::Right));

    session.tick();

    assert!(session.snake().head().to_pixels(CELL_SIZE).0 > extent_x as i32);
    assert_eq!(session.state(), GameState::Ended(EndReason::XBreached));
}

#[test]
fn food_never_spawns_on_snake() {
    for seed in 0..50 {
        let mut session = GameSession::with_rng(Grid::new(4, 4, 10), StdRng::seed_from_u64(seed));
        // Fill most of the 3x3 food candidate block
        session.place_snake(
            Snake::from_cells(
                [(0, 2), (0, 1), (0, 0), (1, 0), (2, 0), (2, 1)]
                    .iter()
                    .map(|&(x, y)| Cell::new(x, y)),
                Direction::Left,
            )
            .unwrap(),
        );
        session.place_food(Cell::new(1, 1));

        let outcome = session.tick();

        assert_eq!(outcome, TickOutcome::Advanced { ate_food: true });
        let food = session.food();
        assert!(!session.snake().contains(food));
        assert!(food == Cell::new(1, 2) || food == Cell::new(2, 2));
    }
}
