use std::fmt;

use super::grid::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};

/// Longest snake the playfield can hold, one segment per cell
pub const SNAKE_MAX_LENGTH: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// One body cell and the heading it will take on the next advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Cell,
    pub direction: Direction,
}

impl Segment {
    pub fn new(position: Cell, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Growth was refused because the snake already fills the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub length: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "snake of length {} cannot grow past {} segments",
            self.length, SNAKE_MAX_LENGTH
        )
    }
}

impl std::error::Error for CapacityExceeded {}

/// The snake, head at index 0.
///
/// Also owns the input gate: at most one turn is accepted between two advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Segment>,
    can_move: bool,
}

impl Snake {
    /// Create a one-segment snake at `start`
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut segments = Vec::with_capacity(SNAKE_MAX_LENGTH);
        segments.push(Segment::new(start, direction));
        Self {
            segments,
            can_move: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        assert!(!segments.is_empty() && segments.len() <= SNAKE_MAX_LENGTH);
        Self {
            segments,
            can_move: true,
        }
    }

    /// Back to a single segment at `start` with the gate open
    pub fn reset(&mut self, start: Cell, direction: Direction) {
        self.segments.clear();
        self.segments.push(Segment::new(start, direction));
        self.can_move = true;
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a live snake
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Point the head at `direction` if the gate is open and the turn is a real
    /// 90-degree turn. Returns whether the turn was taken.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        let current = self.segments[0].direction;
        if !self.can_move || direction == current || direction.is_opposite(current) {
            return false;
        }
        self.segments[0].direction = direction;
        self.can_move = false;
        true
    }

    /// Move every segment one cell along its own heading, then hand each segment the
    /// heading of the one in front of it. The head keeps its (possibly new) heading,
    /// so a turn travels down the body one segment per advance.
    ///
    /// Returns the tail as it was before moving, which is where a new segment goes
    /// when the snake grows.
    pub fn advance(&mut self) -> Segment {
        let tail = self.segments[self.segments.len() - 1];

        let mut carry = self.segments[0].direction;
        for segment in &mut self.segments {
            let next = segment.position.advance(segment.direction);
            let own = segment.direction;
            segment.direction = carry;
            carry = own;
            segment.position = next;
        }

        tail
    }

    /// True when any body segment sits on the head's cell
    pub fn head_hits_body(&self) -> bool {
        let head = self.segments[0].position;
        self.segments[1..].iter().any(|s| s.position == head)
    }

    /// Append `tail` as the new last segment
    pub fn grow(&mut self, tail: Segment) -> Result<(), CapacityExceeded> {
        if self.segments.len() >= SNAKE_MAX_LENGTH {
            return Err(CapacityExceeded {
                length: self.segments.len(),
            });
        }
        self.segments.push(tail);
        Ok(())
    }

    pub fn open_gate(&mut self) {
        self.can_move = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_down() -> Snake {
        Snake::from_segments(vec![
            Segment::new(Cell::new(5, 5), Direction::Down),
            Segment::new(Cell::new(5, 6), Direction::Down),
            Segment::new(Cell::new(5, 7), Direction::Down),
        ])
    }

    #[test]
    fn test_reset() {
        let mut snake = straight_down();
        snake.request_turn(Direction::Left);
        snake.reset(Cell::new(8, 6), Direction::Right);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Segment::new(Cell::new(8, 6), Direction::Right));
        assert!(snake.can_move());
    }

    #[test]
    fn test_reversal_always_rejected() {
        let mut snake = Snake::new(Cell::new(3, 3), Direction::Right);
        assert!(!snake.request_turn(Direction::Left));
        assert_eq!(snake.head().direction, Direction::Right);
        assert!(snake.can_move());

        // Gate closed by a legal turn, reversal of the new heading still rejected
        assert!(snake.request_turn(Direction::Up));
        assert!(!snake.request_turn(Direction::Down));
        assert_eq!(snake.head().direction, Direction::Up);
    }

    #[test]
    fn test_same_direction_rejected() {
        let mut snake = Snake::new(Cell::new(3, 3), Direction::Right);
        assert!(!snake.request_turn(Direction::Right));
        assert!(snake.can_move());
    }

    #[test]
    fn test_one_turn_per_advance() {
        let mut snake = Snake::new(Cell::new(3, 3), Direction::Right);
        assert!(snake.request_turn(Direction::Up));
        assert!(!snake.request_turn(Direction::Left));
        assert_eq!(snake.head().direction, Direction::Up);

        snake.advance();
        snake.open_gate();
        assert!(snake.request_turn(Direction::Left));
        assert_eq!(snake.head().direction, Direction::Left);
    }

    #[test]
    fn test_straight_advance_keeps_headings() {
        let mut snake = straight_down();
        let tail = snake.advance();

        assert_eq!(tail, Segment::new(Cell::new(5, 7), Direction::Down));
        let positions: Vec<Cell> = snake.segments().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![Cell::new(5, 6), Cell::new(5, 7), Cell::new(5, 8)]);
        assert!(snake.segments().iter().all(|s| s.direction == Direction::Down));
        assert!(!snake.head_hits_body());
    }

    #[test]
    fn test_turn_propagates_one_segment_per_advance() {
        let mut snake = Snake::from_segments(vec![
            Segment::new(Cell::new(5, 5), Direction::Right),
            Segment::new(Cell::new(4, 5), Direction::Right),
            Segment::new(Cell::new(3, 5), Direction::Right),
        ]);

        snake.request_turn(Direction::Down);
        snake.advance();
        let s = snake.segments();
        assert_eq!(s[0], Segment::new(Cell::new(5, 6), Direction::Down));
        assert_eq!(s[1], Segment::new(Cell::new(5, 5), Direction::Down));
        assert_eq!(s[2], Segment::new(Cell::new(4, 5), Direction::Right));

        snake.advance();
        let s = snake.segments();
        assert_eq!(s[0], Segment::new(Cell::new(5, 7), Direction::Down));
        assert_eq!(s[1], Segment::new(Cell::new(5, 6), Direction::Down));
        assert_eq!(s[2], Segment::new(Cell::new(5, 5), Direction::Down));
    }

    #[test]
    fn test_grow_refused_at_capacity() {
        let mut segments = Vec::new();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                segments.push(Segment::new(Cell::new(x, y), Direction::Right));
            }
        }
        let mut snake = Snake::from_segments(segments);
        let tail = snake.head();

        assert_eq!(
            snake.grow(tail),
            Err(CapacityExceeded {
                length: SNAKE_MAX_LENGTH
            })
        );
        assert_eq!(snake.len(), SNAKE_MAX_LENGTH);
    }
}
