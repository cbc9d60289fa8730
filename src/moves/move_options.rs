use crate::game_state::chess_types::Square;

/// Destinations available to one piece, split by whether they capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOptions {
    pub quiet: Vec<Square>,
    pub captures: Vec<Square>,
}

impl MoveOptions {
    #[inline]
    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.quiet.contains(&square) || self.captures.contains(&square)
    }

    /// Quiet destinations first, then captures.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.quiet.iter().chain(self.captures.iter()).copied()
    }
}
