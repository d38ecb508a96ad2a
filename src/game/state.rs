use super::food::FoodSpawner;
use super::grid::{Cell, Direction};
use super::snake::Snake;

/// Outcome of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing happened besides moving
    Continue,
    /// The head landed on the food; carries the new length
    FoodEaten { length: usize },
    /// The head ran into the body
    GameOver {
        final_length: usize,
        new_highscore: bool,
    },
}

/// Everything the simulation owns: the snake, the food and the random source
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    spawner: FoodSpawner,
}

impl GameState {
    pub fn new(mut spawner: FoodSpawner) -> Self {
        let food = spawner.spawn();
        let snake = Snake::new(spawner.spawn(), Direction::Right);
        Self {
            snake,
            food,
            spawner,
        }
    }

    /// Fresh round: new food, single-segment snake at a random cell heading right
    pub fn reset(&mut self) {
        self.food = self.spawner.spawn();
        let start = self.spawner.spawn();
        self.snake.reset(start, Direction::Right);
    }

    pub fn request_turn(&mut self, direction: Direction) -> bool {
        self.snake.request_turn(direction)
    }

    /// Advance the snake one cell and resolve collision, then food.
    ///
    /// A collision ends the tick before food is looked at, so food under the head
    /// is left alone when the snake dies.
    pub fn tick(&mut self, highscore: u32) -> TickResult {
        let tail = self.snake.advance();

        let result = if self.snake.head_hits_body() {
            let final_length = self.snake.len();
            TickResult::GameOver {
                final_length,
                new_highscore: final_length as u64 > u64::from(highscore),
            }
        } else if self.snake.head().position == self.food {
            if let Err(error) = self.snake.grow(tail) {
                tracing::warn!(%error, "growth refused");
            }
            self.food = self.spawner.spawn();
            TickResult::FoodEaten {
                length: self.snake.len(),
            }
        } else {
            TickResult::Continue
        };

        self.snake.open_gate();
        result
    }
}
