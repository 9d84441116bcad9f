use scalaropt_core::Objective;

use crate::{FailureReason, Point, interval::Bracket, interval::Event, numeric::probe};

use super::bracket::GoldenBracket;

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Shrink the lower bound; payload is x for the new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink the upper bound; payload is x for the new `inner_left`.
    ShrinkRight(f64),
}

impl ShrinkDirection {
    pub(super) fn x(self) -> f64 {
        match self {
            Self::ShrinkLeft(x) | Self::ShrinkRight(x) => x,
        }
    }
}

pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
}

impl State {
    /// Evaluates both interior points of the initial bracket.
    pub(super) fn init<F: Objective>(objective: &F, bounds: Bracket) -> Result<Self, FailureReason> {
        let bracket = GoldenBracket::new(bounds);
        let left = probe(objective, bracket.inner_left)?;
        let right = probe(objective, bracket.inner_right)?;
        Ok(Self {
            bracket,
            left,
            right,
        })
    }

    pub(super) fn width(&self) -> f64 {
        self.bracket.outer.width()
    }

    pub(super) fn midpoint(&self) -> f64 {
        self.bracket.outer.midpoint()
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    ///
    /// Ties discard the left side.
    pub(super) fn next_direction(&self) -> ShrinkDirection {
        if self.left.objective < self.right.objective {
            ShrinkDirection::ShrinkRight(self.bracket.new_inner_left())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.new_inner_right())
        }
    }

    /// Applies the shrink and stores the newly evaluated interior point.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }
    }

    pub(super) fn event(&self, iter: usize) -> Event {
        Event {
            iter,
            bracket: self.bracket.outer.bounds(),
            left: self.left,
            right: self.right,
        }
    }
}
