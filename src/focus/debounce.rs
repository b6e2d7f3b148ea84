//! Keystroke debouncing for search-driven focus.
//!
//! Viewport commands must not fire on every keystroke; the debouncer
//! holds the latest query until the input has been stable for a quiet
//! period. Poll style: the owning session calls [`SearchDebouncer::poll`]
//! from its event loop, so no timer task or runtime is required.

use std::time::{Duration, Instant};

/// Debounces rapid search input.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(quiet: Duration) -> Self {
        SearchDebouncer {
            quiet,
            pending: None,
        }
    }

    /// Record a keystroke. Any pending query is replaced and its timer
    /// restarted; a blank query cancels the pending focus outright.
    pub fn note(&mut self, query: &str, now: Instant) {
        if query.trim().is_empty() {
            self.pending = None;
        } else {
            self.pending = Some((query.to_string(), now));
        }
    }

    /// Take the settled query once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (_, since) = self.pending.as_ref()?;
        if now.duration_since(*since) < self.quiet {
            return None;
        }
        self.pending.take().map(|(query, _)| query)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(100);

    #[test]
    fn test_poll_before_quiet_period_yields_nothing() {
        let mut debouncer = SearchDebouncer::new(QUIET);
        let start = Instant::now();

        debouncer.note("rum", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(50)), None);
        assert!(debouncer.has_pending());
    }

    #[test]
    fn test_poll_after_quiet_period_yields_latest_once() {
        let mut debouncer = SearchDebouncer::new(QUIET);
        let start = Instant::now();

        debouncer.note("rum", start);
        let settled = debouncer.poll(start + QUIET);
        assert_eq!(settled.as_deref(), Some("rum"));
        assert_eq!(debouncer.poll(start + QUIET * 2), None);
    }

    #[test]
    fn test_keystroke_restarts_the_timer() {
        let mut debouncer = SearchDebouncer::new(QUIET);
        let start = Instant::now();

        debouncer.note("rum", start);
        debouncer.note("rumt", start + Duration::from_millis(80));

        // The first window would have elapsed; the restarted one has not.
        assert_eq!(debouncer.poll(start + Duration::from_millis(120)), None);
        assert_eq!(
            debouncer
                .poll(start + Duration::from_millis(180))
                .as_deref(),
            Some("rumt")
        );
    }

    #[test]
    fn test_blank_input_cancels_pending_focus() {
        let mut debouncer = SearchDebouncer::new(QUIET);
        let start = Instant::now();

        debouncer.note("rum", start);
        debouncer.note("", start + Duration::from_millis(10));
        assert!(!debouncer.has_pending());
        assert_eq!(debouncer.poll(start + QUIET * 2), None);
    }
}
