use std::fmt;

pub const LEFT_GLYPHS: [char; 2] = ['[', '('];
pub const RIGHT_GLYPHS: [char; 2] = [']', ')'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// `(a, b)`
    Open,
    /// `[a, b]`
    Closed,
    /// `[a, b)`, `(a, b]`, and every unrecognised glyph pair.
    HalfOpen,
}

impl BoundaryKind {
    pub fn from_glyphs(left: char, right: char) -> Self {
        match (left, right) {
            ('(', ')') => BoundaryKind::Open,
            ('[', ']') => BoundaryKind::Closed,
            _ => BoundaryKind::HalfOpen,
        }
    }
}

pub fn is_left_glyph(glyph: char) -> bool {
    LEFT_GLYPHS.contains(&glyph)
}

pub fn is_right_glyph(glyph: char) -> bool {
    RIGHT_GLYPHS.contains(&glyph)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub lower: i64,
    pub upper: i64,
    pub left: char,
    pub right: char,
}

impl Interval {
    pub fn new(lower: i64, upper: i64, left: char, right: char) -> Self {
        Self {
            lower,
            upper,
            left,
            right,
        }
    }

    pub fn kind(&self) -> BoundaryKind {
        BoundaryKind::from_glyphs(self.left, self.right)
    }

    /// Upper bound shifted by the glyph pair: `-1` when open, `+1` when closed.
    ///
    /// Returns `None` on `i64` overflow.
    pub fn effective_upper(&self) -> Option<i64> {
        match self.kind() {
            BoundaryKind::Open => self.upper.checked_sub(1),
            BoundaryKind::Closed => self.upper.checked_add(1),
            BoundaryKind::HalfOpen => Some(self.upper),
        }
    }

    /// Number of integers the interval contains.
    pub fn integer_count(&self) -> i64 {
        let width = self.upper.saturating_sub(self.lower);
        let count = match self.kind() {
            BoundaryKind::Open => width.saturating_sub(1),
            BoundaryKind::Closed => width.saturating_add(1),
            BoundaryKind::HalfOpen => width,
        };
        count.max(0)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}, {}{}", self.left, self.lower, self.upper, self.right)
    }
}
