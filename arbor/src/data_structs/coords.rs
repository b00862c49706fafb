use std::fmt::Display;

use crate::data_structs::typedef::PosType;

/// Half-open genomic interval `[start, end)` on a single record.
///
/// Intervals are not required to be disjoint: repeat regions may overlap
/// each other and coding regions may overlap repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: PosType,
    end:   PosType,
}

impl Interval {
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is negative or greater than `end`. Use
    /// [`Interval::try_new`] for untrusted coordinates.
    pub fn new(
        start: PosType,
        end: PosType,
    ) -> Self {
        assert!(
            start >= 0 && start <= end,
            "Start position must be non-negative and less than or equal to end position"
        );
        Self { start, end }
    }

    /// Creates a new `Interval`, rejecting negative or inverted coordinates.
    pub fn try_new(
        start: PosType,
        end: PosType,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(start >= 0, "Interval start {} is negative", start);
        anyhow::ensure!(
            start <= end,
            "Interval start {} is greater than end {}",
            start,
            end
        );
        Ok(Self { start, end })
    }

    /// Returns the start position (inclusive).
    pub fn start(&self) -> PosType {
        self.start
    }

    /// Returns the end position (exclusive).
    pub fn end(&self) -> PosType {
        self.end
    }
}

impl Display for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accessors() {
        let interval = Interval::new(100, 250);
        assert_eq!(interval.start(), 100);
        assert_eq!(interval.end(), 250);
        assert_eq!(interval.to_string(), "[100, 250)");
    }

    #[test]
    fn test_interval_try_new_rejects_invalid() {
        assert!(Interval::try_new(-1, 10).is_err());
        assert!(Interval::try_new(20, 10).is_err());
        assert!(Interval::try_new(10, 20).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_interval_new_panics_on_inverted() {
        Interval::new(30, 10);
    }
}
