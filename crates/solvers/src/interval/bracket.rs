use thiserror::Error;

/// A validated search interval `[lo, hi]` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
}

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket bounds must be finite, got [{lo}, {hi}]")]
    NonFinite { lo: f64, hi: f64 },

    #[error("bracket has zero width at {0}")]
    ZeroWidth(f64),
}

impl Bracket {
    /// Creates a bracket from two bounds.
    ///
    /// If the bounds are reversed, they are automatically swapped.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or the bounds are equal.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bounds;
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite { lo: a, hi: b });
        }
        if a == b {
            return Err(BracketError::ZeroWidth(a));
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { lo, hi })
    }

    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Returns the point at fraction `t` of the way from `lo` to `hi`.
    pub(super) fn at(&self, t: f64) -> f64 {
        self.lo + t * self.width()
    }

    /// Moves the lower bound up to `lo`.
    pub(super) fn raise_lo(&mut self, lo: f64) {
        self.lo = lo;
    }

    /// Moves the upper bound down to `hi`.
    pub(super) fn lower_hi(&mut self, hi: f64) {
        self.hi = hi;
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ordered_bounds_are_kept() {
        let bracket = Bracket::new([-2.0, 2.0]).unwrap();
        assert_relative_eq!(bracket.lo(), -2.0);
        assert_relative_eq!(bracket.hi(), 2.0);
        assert_relative_eq!(bracket.width(), 4.0);
        assert_relative_eq!(bracket.midpoint(), 0.0);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let bracket = Bracket::new([8.0, -8.0]).unwrap();
        assert_eq!(bracket.bounds(), [-8.0, 8.0]);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            Bracket::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite { .. })
        ));
        assert!(matches!(
            Bracket::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite { .. })
        ));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(Bracket::new([1.0, 1.0]), Err(BracketError::ZeroWidth(1.0)));
    }

    #[test]
    fn fractional_position() {
        let bracket = Bracket::new([2.0, 6.0]).unwrap();
        assert_relative_eq!(bracket.at(0.25), 3.0);
    }
}
