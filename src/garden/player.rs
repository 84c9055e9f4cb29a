use super::plant::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The walker's avatar and position.
///
/// Positions are clamped to `0..=width` and `0..=height`. The upper bounds
/// are inclusive, so the player can stand one step past the last column or
/// row (the edge of the garden).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    pub glyph: char,
    max_x: usize,
    max_y: usize,
}

impl Player {
    /// Start at the top-left corner.
    pub fn new(glyph: char, geo: &Geometry) -> Self {
        Self {
            x: 0,
            y: 0,
            glyph,
            max_x: geo.width,
            max_y: geo.height,
        }
    }

    /// Move one step; stepping past a bound does nothing.
    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up if self.y > 0 => self.y -= 1,
            Direction::Down if self.y < self.max_y => self.y += 1,
            Direction::Left if self.x > 0 => self.x -= 1,
            Direction::Right if self.x < self.max_x => self.x += 1,
            _ => {}
        }
    }
}
