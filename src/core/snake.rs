//! Snake entity: an ordered sequence of grid-aligned segments.
//!
//! The head is at index 0. Storage is a fixed-capacity `ArrayVec` sized to
//! the whole grid, so advancing never allocates.

use arrayvec::ArrayVec;

use crate::types::{Direction, Position, GAME_UNITS};

#[derive(Debug, Clone)]
pub struct Snake {
    segments: ArrayVec<Position, GAME_UNITS>,
}

impl Snake {
    /// Create a snake of `len` segments stacked on `start`.
    ///
    /// Stacked segments unspool over the first few advances, exactly like the
    /// zero-initialized coordinate arrays of the original.
    pub fn new(start: Position, len: usize) -> Self {
        let mut segments = ArrayVec::new();
        for _ in 0..len.min(GAME_UNITS) {
            segments.push(start);
        }
        Self { segments }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Advance one step in `dir`: every segment takes its predecessor's
    /// position, then the head moves one unit and wraps at the screen edges.
    /// Length is unchanged.
    pub fn advance(&mut self, dir: Direction) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].step(dir).wrap();
    }

    /// Grow by one segment, duplicating the tail position.
    ///
    /// The duplicate is overwritten by the next advance, which is how the
    /// original grows (bump bodyParts, let the shift fill it in).
    pub fn grow(&mut self) {
        if let Some(&tail) = self.segments.last() {
            let _ = self.segments.try_push(tail);
        }
    }

    /// True when the head occupies the same cell as any body segment.
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.segments[1..].iter().any(|&seg| seg == head)
    }

    /// True when any segment occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|&seg| seg == pos)
    }

    /// Replace the segment list wholesale (scenario setup only).
    #[cfg(test)]
    pub fn set_segments(&mut self, positions: &[Position]) {
        self.segments.clear();
        for &p in positions.iter().take(GAME_UNITS) {
            self.segments.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{INITIAL_BODY_PARTS, SCREEN_WIDTH, UNIT_SIZE};

    fn straight_snake(head: Position, len: usize, dir: Direction) -> Snake {
        // Segments trail opposite the heading.
        let mut positions = Vec::with_capacity(len);
        let mut p = head;
        for _ in 0..len {
            positions.push(p);
            p = p.step(dir.opposite()).wrap();
        }
        let mut snake = Snake::new(head, len);
        snake.set_segments(&positions);
        snake
    }

    #[test]
    fn new_snake_is_stacked_on_start() {
        let snake = Snake::new(Position::new(0, 0), INITIAL_BODY_PARTS);
        assert_eq!(snake.len(), INITIAL_BODY_PARTS);
        assert!(snake.segments().iter().all(|&s| s == Position::new(0, 0)));
    }

    #[test]
    fn advance_preserves_length_and_drops_tail() {
        let mut snake = straight_snake(Position::new(600, 600), 6, Direction::Right);
        let old_tail = *snake.segments().last().unwrap();

        snake.advance(Direction::Right);

        assert_eq!(snake.head(), Position::new(650, 600));
        assert_eq!(snake.len(), 6);
        assert!(!snake.segments().contains(&old_tail));
    }

    #[test]
    fn advance_wraps_at_right_edge() {
        let mut snake = straight_snake(
            Position::new(SCREEN_WIDTH - UNIT_SIZE, 600),
            3,
            Direction::Right,
        );
        snake.advance(Direction::Right);
        assert_eq!(snake.head(), Position::new(0, 600));
    }

    #[test]
    fn grow_duplicates_tail_until_next_advance() {
        let mut snake = straight_snake(Position::new(600, 600), 4, Direction::Right);
        let tail = *snake.segments().last().unwrap();

        snake.grow();
        assert_eq!(snake.len(), 5);
        assert_eq!(*snake.segments().last().unwrap(), tail);

        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 5);
        // The duplicate has been overwritten by the shift.
        assert_eq!(*snake.segments().last().unwrap(), tail);
        assert_eq!(snake.segments()[snake.len() - 2], tail.step(Direction::Right));
    }

    #[test]
    fn hits_self_detects_head_on_body() {
        let mut snake = Snake::new(Position::new(0, 0), 5);
        snake.set_segments(&[
            Position::new(100, 100),
            Position::new(150, 100),
            Position::new(150, 150),
            Position::new(100, 150),
            Position::new(100, 100),
        ]);
        assert!(snake.hits_self());
    }

    #[test]
    fn straight_snake_does_not_hit_self() {
        let snake = straight_snake(Position::new(600, 600), 6, Direction::Right);
        assert!(!snake.hits_self());
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = straight_snake(Position::new(600, 600), 3, Direction::Right);
        assert!(snake.occupies(Position::new(600, 600)));
        assert!(snake.occupies(Position::new(500, 600)));
        assert!(!snake.occupies(Position::new(450, 600)));
    }
}
