use std::fmt;

/// Edge weight. The input domain is integral, which keeps tie detection exact.
pub type Weight = i64;

/// Type alias for a single edge: (from, to, weight)
pub type Edge = (usize, usize, Weight);

/// A concrete vertex sequence.
pub type Path = Vec<usize>;

/// Best known cost between two vertices.
///
/// Variant order matters: the derived `Ord` places every finite value below
/// `Infinite`, so `candidate < current` reads the same as for plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any.
    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }

    /// Returns true for a finite value strictly below zero.
    pub fn is_negative(&self) -> bool {
        matches!(self, Distance::Finite(w) if *w < 0)
    }

    /// Sums two distances, saturating at the `i64` bounds.
    ///
    /// Returns `Infinite` if either side is infinite.
    pub fn saturating_add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Infinite,
        }
    }
}

impl From<Weight> for Distance {
    fn from(w: Weight) -> Self {
        Distance::Finite(w)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(w) => fmt::Display::fmt(w, f),
            Distance::Infinite => f.pad("∞"),
        }
    }
}

#[cfg(test)]
mod distance_tests {
    use super::*;

    #[test]
    fn infinite_sorts_after_every_finite_value() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
    }

    #[test]
    fn saturating_add_propagates_infinity() {
        assert_eq!(
            Distance::Finite(4).saturating_add(Distance::Infinite),
            Distance::Infinite
        );
        assert_eq!(
            Distance::Finite(i64::MIN).saturating_add(Distance::Finite(-1)),
            Distance::Finite(i64::MIN)
        );
    }

    #[test]
    fn display_pads_like_numbers() {
        assert_eq!(format!("{:>5}", Distance::Infinite), "    ∞");
        assert_eq!(format!("{:>5}", Distance::Finite(-2)), "   -2");
    }
}
