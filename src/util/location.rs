use std::fmt;

/// Represents a column in a single line formula. Columns are 1-based
/// and count chars, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub col: usize,
}

impl Location {
    pub fn new(col: usize) -> Self {
        Self { col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col {}", self.col)
    }
}
