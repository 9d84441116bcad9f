/// Hook called by a solver once per iteration.
///
/// A solver hands each observer its iteration `Event`. Returning `Some(action)`
/// asks the solver to act on it, for example to stop early, and `None` leaves
/// the run untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when no
/// observation is wanted.
pub trait Observer<E, A> {
    /// Inspects one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
