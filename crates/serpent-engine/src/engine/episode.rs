use std::collections::HashSet;

use rand::{Rng, seq::IndexedRandom as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    BoardFullError, InvalidLayoutError,
    core::{Cell, Direction, Grid, Snake},
};

use super::{Action, Danger, GameConfig, Sensor};

/// Why an episode stopped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EndCause {
    /// The head left the grid.
    #[display("hit the wall")]
    Wall,
    /// The head ran into the snake's own body.
    #[display("ran into its own body")]
    Body,
    /// The step budget ran out.
    #[display("step limit reached")]
    TimeLimit,
    /// The snake covers every cell, so no food could be placed.
    #[display("board filled")]
    BoardFull,
}

impl EndCause {
    /// `true` for the fatal endings (wall or body).
    #[must_use]
    pub const fn is_collision(self) -> bool {
        matches!(self, Self::Wall | Self::Body)
    }
}

/// What a single [`EpisodeState::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The episode had already ended; nothing changed.
    Ignored,
    /// The snake moved and the episode goes on.
    Moved { ate_food: bool },
    /// This tick ended the episode.
    Ended { ate_food: bool, cause: EndCause },
}

/// Canonical state of one episode.
///
/// Invariants while alive:
///
/// - snake cells are pairwise distinct and inside the grid
/// - the food is inside the grid and not on the snake
/// - `steps < max_steps`
///
/// The state is created by [`EpisodeState::reset`] and changed only by
/// [`EpisodeState::step`]. Once ended, further steps are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeState {
    config: GameConfig,
    snake: Snake,
    dir: Direction,
    food: Cell,
    steps: usize,
    score: usize,
    end_cause: Option<EndCause>,
}

fn choose_free_cell<R>(grid: Grid, snake: &Snake, rng: &mut R) -> Result<Cell, BoardFullError>
where
    R: Rng + ?Sized,
{
    let occupied = snake.cells().collect::<HashSet<_>>();
    let free = grid
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect::<Vec<_>>();
    free.choose(rng).copied().ok_or(BoardFullError)
}

impl EpisodeState {
    /// Starts a fresh episode.
    ///
    /// The snake is a single cell at the grid centre facing a uniformly
    /// random direction, and food is placed on a uniformly random free cell.
    /// The direction is drawn from `rng` before the food.
    pub fn reset<R>(config: GameConfig, rng: &mut R) -> Result<Self, BoardFullError>
    where
        R: Rng + ?Sized,
    {
        let snake = Snake::new(config.grid().center());
        let dir: Direction = rng.random();
        let food = choose_free_cell(config.grid(), &snake, rng)?;
        trace!(%food, %dir, "episode reset");
        Ok(Self {
            config,
            snake,
            dir,
            food,
            steps: 0,
            score: 0,
            end_cause: None,
        })
    }

    /// Builds a live episode from an explicit layout.
    ///
    /// `body` lists the snake cells head first. Counters start at zero.
    pub fn from_layout<I>(
        config: GameConfig,
        body: I,
        dir: Direction,
        food: Cell,
    ) -> Result<Self, InvalidLayoutError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let grid = config.grid();
        let snake = Snake::from_cells(body).ok_or(InvalidLayoutError::EmptySnake)?;
        let mut seen = HashSet::with_capacity(snake.len());
        for cell in snake.cells() {
            if !grid.contains(cell) {
                return Err(InvalidLayoutError::SnakeOutOfBounds(cell));
            }
            if !seen.insert(cell) {
                return Err(InvalidLayoutError::SnakeOverlap(cell));
            }
        }
        if !grid.contains(food) {
            return Err(InvalidLayoutError::FoodOutOfBounds(food));
        }
        if seen.contains(&food) {
            return Err(InvalidLayoutError::FoodOnSnake(food));
        }
        Ok(Self {
            config,
            snake,
            dir,
            food,
            steps: 0,
            score: 0,
            end_cause: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.dir
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of food items eaten.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.end_cause.is_none()
    }

    /// Why the episode ended, or `None` while it is still running.
    #[must_use]
    pub fn end_cause(&self) -> Option<EndCause> {
        self.end_cause
    }

    /// Moves the food to a uniformly random cell not covered by the snake.
    pub fn spawn_food<R>(&mut self, rng: &mut R) -> Result<Cell, BoardFullError>
    where
        R: Rng + ?Sized,
    {
        self.food = choose_free_cell(self.config.grid(), &self.snake, rng)?;
        trace!(food = %self.food, "spawned food");
        Ok(self.food)
    }

    /// `true` when the head moving one step towards `dir` would end the episode.
    #[must_use]
    pub fn is_dangerous(&self, dir: Direction) -> bool {
        let next = self.snake.head().moved(dir);
        !self.config.grid().contains(next) || self.snake.contains(next)
    }

    /// Snapshot of the state as seen by a player.
    #[must_use]
    pub fn sensor(&self) -> Sensor {
        Sensor {
            food_vec: self.snake.head().offset_to(self.food),
            danger: Danger::from_fn(|dir| self.is_dangerous(dir)),
            current_dir: self.dir,
            length: self.snake.len(),
            steps: self.steps,
        }
    }

    /// Advances the episode by one tick.
    ///
    /// A reversal is corrected to the current direction before any collision
    /// check. A fatal move leaves the snake body untouched. Eating grows the
    /// snake by one cell and places new food.
    ///
    /// Fails only when the snake has filled the whole grid after eating; the
    /// episode is then ended with [`EndCause::BoardFull`].
    pub fn step<R>(&mut self, action: Action, rng: &mut R) -> Result<StepOutcome, BoardFullError>
    where
        R: Rng + ?Sized,
    {
        if !self.is_alive() {
            return Ok(StepOutcome::Ignored);
        }

        self.dir = action.resolve(self.dir);
        let new_head = self.snake.head().moved(self.dir);
        self.steps += 1;

        if !self.config.grid().contains(new_head) {
            return Ok(self.end(EndCause::Wall, false));
        }
        if self.snake.contains(new_head) {
            return Ok(self.end(EndCause::Body, false));
        }

        let ate_food = new_head == self.food;
        self.snake.push_head(new_head);
        if ate_food {
            self.score += 1;
            if let Err(err) = self.spawn_food(rng) {
                self.end(EndCause::BoardFull, true);
                return Err(err);
            }
        } else {
            self.snake.pop_tail();
        }

        if self.steps >= self.config.max_steps() {
            return Ok(self.end(EndCause::TimeLimit, ate_food));
        }
        Ok(StepOutcome::Moved { ate_food })
    }

    fn end(&mut self, cause: EndCause, ate_food: bool) -> StepOutcome {
        self.end_cause = Some(cause);
        debug!(%cause, score = self.score, steps = self.steps, "episode ended");
        StepOutcome::Ended { ate_food, cause }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0)
    }

    fn config(rows: u16, cols: u16, max_steps: usize) -> GameConfig {
        GameConfig::new(rows, cols, max_steps).unwrap()
    }

    fn layout(body: &[(i32, i32)], dir: Direction, food: (i32, i32)) -> EpisodeState {
        EpisodeState::from_layout(
            config(12, 12, 200),
            body.iter().map(|&(r, c)| Cell::new(r, c)),
            dir,
            Cell::new(food.0, food.1),
        )
        .unwrap()
    }

    fn body(state: &EpisodeState) -> Vec<Cell> {
        state.snake().cells().collect()
    }

    #[test]
    fn test_reset_places_single_cell_snake_at_center() {
        let mut rng = rng();
        for _ in 0..20 {
            let state = EpisodeState::reset(config(12, 12, 200), &mut rng).unwrap();
            assert_eq!(body(&state), [Cell::new(6, 6)]);
            assert_ne!(state.food(), Cell::new(6, 6));
            assert!(state.config().grid().contains(state.food()));
            assert_eq!(state.steps(), 0);
            assert_eq!(state.score(), 0);
            assert!(state.is_alive());
            assert_eq!(state.end_cause(), None);
        }
    }

    #[test]
    fn test_reset_center_rounds_down_on_odd_grid() {
        let state = EpisodeState::reset(config(5, 7, 10), &mut rng()).unwrap();
        assert_eq!(state.snake().head(), Cell::new(2, 3));
    }

    #[test]
    fn test_reset_on_single_cell_grid_is_board_full() {
        let result = EpisodeState::reset(config(1, 1, 10), &mut rng());
        assert_eq!(result, Err(BoardFullError));
    }

    #[test]
    fn test_from_layout_rejects_broken_invariants() {
        let cfg = config(4, 4, 10);
        let cases = [
            (vec![], (0, 0), InvalidLayoutError::EmptySnake),
            (
                vec![(0, 0), (0, 4)],
                (2, 2),
                InvalidLayoutError::SnakeOutOfBounds(Cell::new(0, 4)),
            ),
            (
                vec![(0, 0), (0, 1), (0, 0)],
                (2, 2),
                InvalidLayoutError::SnakeOverlap(Cell::new(0, 0)),
            ),
            (
                vec![(0, 0)],
                (-1, 2),
                InvalidLayoutError::FoodOutOfBounds(Cell::new(-1, 2)),
            ),
            (
                vec![(0, 0), (0, 1)],
                (0, 1),
                InvalidLayoutError::FoodOnSnake(Cell::new(0, 1)),
            ),
        ];
        for (cells, food, expected) in cases {
            let result = EpisodeState::from_layout(
                cfg,
                cells.into_iter().map(|(r, c)| Cell::new(r, c)),
                Direction::Right,
                Cell::new(food.0, food.1),
            );
            assert_eq!(result, Err(expected));
        }
    }

    #[test]
    fn test_spawn_food_fills_the_only_free_cell() {
        let cells = [(0, 0), (0, 1), (1, 1)];
        let mut state = EpisodeState::from_layout(
            config(2, 2, 10),
            cells.iter().map(|&(r, c)| Cell::new(r, c)),
            Direction::Up,
            Cell::new(1, 0),
        )
        .unwrap();
        let mut rng = rng();
        for _ in 0..10 {
            assert_eq!(state.spawn_food(&mut rng), Ok(Cell::new(1, 0)));
        }
    }

    #[test]
    fn test_spawn_food_on_full_board_fails() {
        let cells = [(0, 0), (0, 1), (1, 1), (1, 0)];
        let food = Cell::new(0, 0);
        let mut state = layout(&[(5, 5)], Direction::Up, (0, 0));
        state.config = config(2, 2, 10);
        state.snake = Snake::from_cells(cells.iter().map(|&(r, c)| Cell::new(r, c))).unwrap();
        state.food = food;
        assert_eq!(state.spawn_food(&mut rng()), Err(BoardFullError));
    }

    #[test]
    fn test_corner_marks_up_and_left_dangerous() {
        let state = layout(&[(0, 0)], Direction::Right, (5, 5));
        let sensor = state.sensor();
        assert!(sensor.danger[Direction::Up]);
        assert!(sensor.danger[Direction::Left]);
        assert!(!sensor.danger[Direction::Down]);
        assert!(!sensor.danger[Direction::Right]);

        let state = layout(&[(0, 0), (0, 1), (1, 1), (1, 0)], Direction::Up, (5, 5));
        let sensor = state.sensor();
        assert!(sensor.danger[Direction::Up]);
        assert!(sensor.danger[Direction::Left]);
        assert!(sensor.danger[Direction::Right]);
        assert!(sensor.danger[Direction::Down]);
    }

    #[test]
    fn test_sensor_reports_food_vector_and_counters() {
        let state = layout(&[(6, 6), (6, 5), (6, 4)], Direction::Right, (2, 9));
        let sensor = state.sensor();
        assert_eq!(sensor.food_vec, (-4, 3));
        assert_eq!(sensor.current_dir, Direction::Right);
        assert_eq!(sensor.length, 3);
        assert_eq!(sensor.steps, 0);
        assert!(sensor.danger[Direction::Left]);
        assert!(!sensor.danger[Direction::Up]);
    }

    #[test]
    fn test_eating_grows_and_respawns_food() {
        let mut state = layout(&[(6, 6), (6, 5)], Direction::Right, (6, 7));
        assert!(!state.sensor().danger[Direction::Right]);

        let outcome = state.step(Action::from("RIGHT"), &mut rng()).unwrap();

        assert_eq!(outcome, StepOutcome::Moved { ate_food: true });
        assert_eq!(state.score(), 1);
        assert_eq!(body(&state), [Cell::new(6, 7), Cell::new(6, 6), Cell::new(6, 5)]);
        assert!(!state.snake().contains(state.food()));
        assert!(state.config().grid().contains(state.food()));
    }

    #[test]
    fn test_plain_move_drops_tail() {
        let mut state = layout(&[(6, 6), (6, 5), (6, 4)], Direction::Right, (0, 0));
        let outcome = state.step(Action::Move(Direction::Up), &mut rng()).unwrap();
        assert_eq!(outcome, StepOutcome::Moved { ate_food: false });
        assert_eq!(body(&state), [Cell::new(5, 6), Cell::new(6, 6), Cell::new(6, 5)]);
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.steps(), 1);
        assert_eq!(state.food(), Cell::new(0, 0));
    }

    #[test]
    fn test_reversal_is_corrected_for_every_direction() {
        for dir in Direction::ALL {
            let head = Cell::new(6, 6);
            let neck = head.moved(dir.opposite());
            let mut state = layout(&[(head.row, head.col), (neck.row, neck.col)], dir, (0, 0));
            let outcome = state.step(Action::Move(dir.opposite()), &mut rng()).unwrap();
            assert_eq!(outcome, StepOutcome::Moved { ate_food: false });
            assert_eq!(state.direction(), dir);
            assert_eq!(state.snake().head(), head.moved(dir));
        }
    }

    #[test]
    fn test_unknown_label_goes_straight() {
        let mut state = layout(&[(6, 6)], Direction::Down, (0, 0));
        state.step(Action::from("sideways"), &mut rng()).unwrap();
        assert_eq!(state.snake().head(), Cell::new(7, 6));
        assert_eq!(state.direction(), Direction::Down);
    }

    #[test]
    fn test_wall_collision_keeps_body_and_score() {
        let mut state = layout(&[(0, 3), (1, 3)], Direction::Up, (5, 5));
        let outcome = state.step(Action::Continue, &mut rng()).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Ended {
                ate_food: false,
                cause: EndCause::Wall
            }
        );
        assert!(!state.is_alive());
        assert_eq!(body(&state), [Cell::new(0, 3), Cell::new(1, 3)]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.steps(), 1);
    }

    #[test]
    fn test_body_collision_uses_pre_move_body() {
        // Head at (1,1) curling into the tail cell (2,1).
        let cells = [(1, 1), (1, 2), (2, 2), (2, 1)];
        let mut state = layout(&cells, Direction::Left, (9, 9));
        let outcome = state.step(Action::Move(Direction::Down), &mut rng()).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Ended {
                ate_food: false,
                cause: EndCause::Body
            }
        );
        assert_eq!(state.end_cause(), Some(EndCause::Body));
        assert_eq!(state.snake().len(), 4);
    }

    #[test]
    fn test_step_after_end_is_ignored() {
        let mut state = layout(&[(0, 0)], Direction::Up, (5, 5));
        state.step(Action::Continue, &mut rng()).unwrap();
        let snapshot = state.clone();
        for label in ["UP", "DOWN", "LEFT", "RIGHT", "??"] {
            assert_eq!(
                state.step(Action::from(label), &mut rng()),
                Ok(StepOutcome::Ignored)
            );
        }
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_time_limit_keeps_the_last_tick() {
        let mut state = EpisodeState::from_layout(
            config(12, 12, 3),
            [Cell::new(6, 6)],
            Direction::Right,
            Cell::new(6, 9),
        )
        .unwrap();
        let mut rng = rng();
        for _ in 0..2 {
            assert_eq!(
                state.step(Action::Continue, &mut rng),
                Ok(StepOutcome::Moved { ate_food: false })
            );
        }
        let outcome = state.step(Action::Continue, &mut rng).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Ended {
                ate_food: true,
                cause: EndCause::TimeLimit
            }
        );
        assert!(!state.is_alive());
        assert_eq!(state.steps(), 3);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().head(), Cell::new(6, 9));
        assert_eq!(state.snake().len(), 2);
    }

    #[test]
    fn test_eating_the_last_free_cell_fails_with_board_full() {
        let cells = [(0, 0), (1, 0), (1, 1)];
        let mut state = EpisodeState::from_layout(
            config(2, 2, 10),
            cells.iter().map(|&(r, c)| Cell::new(r, c)),
            Direction::Up,
            Cell::new(0, 1),
        )
        .unwrap();
        let result = state.step(Action::Move(Direction::Right), &mut rng());
        assert_eq!(result, Err(BoardFullError));
        assert_eq!(state.end_cause(), Some(EndCause::BoardFull));
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
    }
}
