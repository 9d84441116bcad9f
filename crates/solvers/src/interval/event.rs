use crate::Point;

/// Event emitted by the interval solvers after each bracket shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of shrink steps taken so far, starting at 1.
    pub iter: usize,

    /// The bracket after this step, as `[lo, hi]`.
    pub bracket: [f64; 2],

    /// The most recent left probe.
    pub left: Point,

    /// The most recent right probe.
    pub right: Point,
}

impl Event {
    /// Returns the width of the bracket after this step.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }

    /// Returns the better of the two probes.
    #[must_use]
    pub fn best(&self) -> Point {
        self.left.better(self.right)
    }
}
