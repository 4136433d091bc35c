//! Source locations and spans.

use std::fmt;

/// A position in the input (1-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A region of the input. Both ends are inclusive: `end` is the location
/// of the last character belonging to the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// A span covering a single character.
    pub const fn point(loc: Location) -> Self {
        Self {
            start: loc,
            end: loc,
        }
    }

    /// The smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            if self.start.column == self.end.column {
                write!(f, "{}", self.start)
            } else {
                write!(f, "{} - {}", self.start, self.end.column)
            }
        } else {
            write!(f, "{} - {}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_orders_ends() {
        let a = Span::new(Location::new(2, 5), Location::new(2, 9));
        let b = Span::new(Location::new(1, 3), Location::new(1, 4));
        let m = a.merge(b);
        assert_eq!(m.start, Location::new(1, 3));
        assert_eq!(m.end, Location::new(2, 9));
        assert!(m.contains(&a));
        assert!(m.contains(&b));
        assert!(!a.contains(&m));
    }

    #[test]
    fn test_display() {
        let one_line = Span::new(Location::new(3, 5), Location::new(3, 9));
        assert_eq!(one_line.to_string(), "line 3, column 5 - 9");

        let point = Span::point(Location::new(1, 1));
        assert_eq!(point.to_string(), "line 1, column 1");

        let multi = Span::new(Location::new(1, 2), Location::new(4, 1));
        assert_eq!(multi.to_string(), "line 1, column 2 - line 4, column 1");
    }
}
