use crate::interval::Bracket;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
const INV_PHI: f64 = PHI - 1.0;

/// Golden ratio search bracket.
///
/// Maintains the outer interval and two interior points positioned
/// according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer bounds.
    pub(super) outer: Bracket,

    /// Inner left point at `lo + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `lo + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket with interior points positioned by the golden ratio.
    pub(super) fn new(outer: Bracket) -> Self {
        Self {
            outer,
            inner_left: outer.at(1.0 - INV_PHI),
            inner_right: outer.at(INV_PHI),
        }
    }

    /// Shrinks the bounds to `[lo, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`, and a new
    /// `inner_left` is placed by the golden ratio.
    pub(super) fn shrink_right(&mut self) {
        self.outer.lower_hi(self.inner_right);
        self.inner_right = self.inner_left;
        self.inner_left = self.outer.at(1.0 - INV_PHI);
    }

    /// Shrinks the bounds to `[inner_left, hi]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`, and a new
    /// `inner_right` is placed by the golden ratio.
    pub(super) fn shrink_left(&mut self) {
        self.outer.raise_lo(self.inner_left);
        self.inner_left = self.inner_right;
        self.inner_right = self.outer.at(INV_PHI);
    }

    /// Returns x for the new `inner_left` after shrinking right, without mutating.
    pub(super) fn new_inner_left(&self) -> f64 {
        let new_width = self.inner_right - self.outer.lo();
        self.outer.lo() + (1.0 - INV_PHI) * new_width
    }

    /// Returns x for the new `inner_right` after shrinking left, without mutating.
    pub(super) fn new_inner_right(&self) -> f64 {
        let new_width = self.outer.hi() - self.inner_left;
        self.inner_left + INV_PHI * new_width
    }
}
