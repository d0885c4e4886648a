/// Watches a running simulation and may ask it to stop.
///
/// The engine hands every recorded sample to `observe`. Returning
/// `Some(action)` requests that action, for example stopping once both
/// populations have gone extinct; `None` lets the run continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` observes nothing
/// and never stops a run.
pub trait Observer<E, A> {
    /// Inspects one event, optionally returning a control action.
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

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_counts_samples_until_extinct() {
        let mut seen = 0;
        let mut stop_when_extinct = |extinct: &bool| {
            seen += 1;
            extinct.then_some("stop")
        };

        assert_eq!(stop_when_extinct.observe(&false), None);
        assert_eq!(stop_when_extinct.observe(&true), Some("stop"));
        assert_eq!(seen, 2);
    }

    #[test]
    fn unit_never_stops() {
        let mut observer = ();
        assert_eq!(Observer::<bool, ()>::observe(&mut observer, &true), None);
    }
}
