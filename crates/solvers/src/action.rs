/// Actions an observer can take during a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    ///
    /// The result is a failure with reason
    /// [`FailureReason::StoppedByObserver`](crate::FailureReason::StoppedByObserver).
    StopEarly,
}
