// crates/engine/src/stats.rs
use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Number of newline-terminated records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineCount(usize);

impl LineCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<usize> for LineCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<LineCount> for usize {
    fn from(value: LineCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for LineCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/alignment flags apply to the number.
        fmt::Display::fmt(&self.0, f)
    }
}

/// One labelled row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub label: String,
    pub lines: LineCount,
}

impl CountEntry {
    pub fn new(label: impl Into<String>, lines: LineCount) -> Self {
        Self {
            label: label.into(),
            lines,
        }
    }
}

/// Rows in configured order, followed by the recursive total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub entries: Vec<CountEntry>,
    pub total: LineCount,
    pub excludes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_counts() {
        let total: LineCount = [3usize, 4, 0].into_iter().map(LineCount::from).sum();
        assert_eq!(total, 7usize);
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:>5}", LineCount::new(42)), "   42");
        assert_eq!(format!("{:<4}|", LineCount::new(7)), "7   |");
    }

    #[test]
    fn zero_is_default() {
        assert!(LineCount::default().is_zero());
        assert_eq!(usize::from(LineCount::new(5) + LineCount::zero()), 5);
    }
}
