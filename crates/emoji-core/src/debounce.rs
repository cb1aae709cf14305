//! Cancellable single-shot timer bookkeeping for debounced searches.
//!
//! The debouncer owns no timer itself. Scheduling hands back a
//! [`DebounceToken`] and a deadline; the host either arms a real timer and
//! reports back with the token, or polls with the current time. Each new
//! schedule replaces the previous one, so at most one callback is live, and
//! a callback carrying a replaced or cancelled token does nothing.

use std::time::Duration;

use web_time::Instant;

/// Handle identifying one scheduled run.
///
/// `owner` ties the token to the session that scheduled it, so a token
/// outliving its session can never fire into a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken {
    owner: u64,
    generation: u64,
}

impl DebounceToken {
    pub fn owner(&self) -> u64 {
        self.owner
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    owner: u64,
    delay: Duration,
    generation: u64,
    pending: Option<(DebounceToken, Instant)>,
}

impl Debouncer {
    pub fn new(owner: u64, delay: Duration) -> Self {
        Self {
            owner,
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a run `delay` after `now`, cancelling any pending one.
    pub fn schedule(&mut self, now: Instant) -> (DebounceToken, Instant) {
        if let Some((replaced, _)) = self.pending.take() {
            tracing::trace!(generation = replaced.generation, "debounce rescheduled");
        }
        self.generation += 1;
        let token = DebounceToken {
            owner: self.owner,
            generation: self.generation,
        };
        let deadline = now + self.delay;
        self.pending = Some((token, deadline));
        (token, deadline)
    }

    /// Drop the pending run, if any.
    pub fn cancel(&mut self) -> Option<DebounceToken> {
        self.pending.take().map(|(token, _)| token)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_token(&self) -> Option<DebounceToken> {
        self.pending.map(|(token, _)| token)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    pub fn is_current(&self, token: DebounceToken) -> bool {
        self.pending_token() == Some(token)
    }

    /// Consume the pending run if `token` is still the live one.
    ///
    /// Returns false for stale tokens, leaving any newer run untouched.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.is_current(token) {
            self.pending = None;
            true
        } else {
            tracing::trace!(
                owner = token.owner,
                generation = token.generation,
                "stale debounce token ignored"
            );
            false
        }
    }

    /// Consume the pending run if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<DebounceToken> {
        match self.pending {
            Some((token, deadline)) if now >= deadline => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn rescheduling_keeps_one_pending_run() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(1, DELAY);

        let (first, _) = debouncer.schedule(start);
        let (second, deadline) = debouncer.schedule(start + Duration::from_millis(100));

        assert_ne!(first, second);
        assert_eq!(deadline, start + Duration::from_millis(400));
        assert!(!debouncer.fire(first));
        assert!(debouncer.is_current(second));
        assert!(debouncer.fire(second));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(second));
    }

    #[test]
    fn fire_due_waits_for_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(1, DELAY);
        let (token, _) = debouncer.schedule(start);

        assert_eq!(debouncer.fire_due(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.fire_due(start + DELAY), Some(token));
        assert_eq!(debouncer.fire_due(start + DELAY * 2), None);
    }

    #[test]
    fn cancel_makes_token_stale() {
        let mut debouncer = Debouncer::new(7, DELAY);
        let (token, _) = debouncer.schedule(Instant::now());
        assert_eq!(token.owner(), 7);
        assert_eq!(debouncer.cancel(), Some(token));
        assert!(!debouncer.fire(token));
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn tokens_from_other_owners_never_match() {
        let now = Instant::now();
        let mut a = Debouncer::new(1, DELAY);
        let mut b = Debouncer::new(2, DELAY);
        let (token_a, _) = a.schedule(now);
        b.schedule(now);
        assert!(!b.fire(token_a));
        assert!(b.is_pending());
    }
}
