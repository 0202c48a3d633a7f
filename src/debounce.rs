//! Debouncing for noisy pointer event streams
//!
//! Pointer-over/pointer-out sequences arrive in rapid bursts while the
//! cursor crosses a toolbar. A [`Debouncer`] coalesces such a burst into a
//! single settled firing: each trigger cancels the pending deadline and
//! schedules a new one, so only the last trigger of a burst takes effect.
//!
//! The debouncer is poll-driven: the host forwards events through
//! [`Debouncer::trigger`] and pumps [`Debouncer::poll`] from its event
//! loop. Timestamps are passed in by the caller, so tests run without a
//! real clock. At most one deferred payload is pending per instance; there
//! is no queueing and no re-entrancy. A debouncer that is never polled
//! again simply never fires, which is acceptable for visual state.

use std::time::{Duration, Instant};

struct Pending<T> {
    deadline: Instant,
    /// Deferred payload; absent in immediate mode, where the pending slot
    /// only tracks the suppression window.
    payload: Option<T>,
}

/// Coalesces rapid repeated triggers into one firing per settled burst.
pub struct Debouncer<T> {
    wait: Duration,
    immediate: bool,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Trailing-edge debouncer: fires `wait` after the last trigger of a
    /// burst, with that trigger's payload.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            immediate: false,
            pending: None,
        }
    }

    /// Leading-edge debouncer: the first trigger of a burst fires
    /// synchronously (returned from [`trigger`](Self::trigger)); further
    /// triggers inside the window are suppressed until it elapses.
    pub fn immediate(wait: Duration) -> Self {
        Self {
            wait,
            immediate: true,
            pending: None,
        }
    }

    /// Record a trigger at `now`, cancelling any pending deadline and
    /// scheduling a new one `wait` later.
    ///
    /// Returns `Some(payload)` only for the leading-edge mode's
    /// synchronous firing; trailing-mode callers always get `None` here
    /// and receive the payload from [`poll`](Self::poll).
    pub fn trigger(&mut self, payload: T, now: Instant) -> Option<T> {
        let deadline = now + self.wait;

        if self.immediate {
            let window_was_idle = self.pending.is_none();
            self.pending = Some(Pending {
                deadline,
                payload: None,
            });
            if window_was_idle {
                tracing::trace!("debounce leading-edge fire");
                return Some(payload);
            }
            return None;
        }

        self.pending = Some(Pending {
            deadline,
            payload: Some(payload),
        });
        None
    }

    /// Fire the settled payload if the deadline has passed.
    ///
    /// In immediate mode the deadline passing merely closes the
    /// suppression window; nothing fires on the trailing edge.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }

        let fired = self.pending.take().and_then(|p| p.payload);
        if fired.is_some() {
            tracing::trace!("debounce trailing-edge fire");
        }
        fired
    }

    /// Whether a deadline (or suppression window) is currently open
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(300);

    #[test]
    fn test_burst_fires_once_with_last_payload() {
        let mut debouncer: Debouncer<u32> = Debouncer::new(WAIT);
        let start = Instant::now();

        for i in 0..5u32 {
            let at = start + Duration::from_millis(50 * u64::from(i));
            assert_eq!(debouncer.trigger(i, at), None);
        }

        // 300ms counted from the LAST trigger (at +200ms): nothing at
        // +450ms, fires at +500ms with the last payload.
        assert_eq!(debouncer.poll(start + Duration::from_millis(450)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some(4)
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_fires_only_once_per_burst() {
        let mut debouncer: Debouncer<&str> = Debouncer::new(WAIT);
        let start = Instant::now();

        debouncer.trigger("a", start);
        let settled = start + WAIT;
        assert_eq!(debouncer.poll(settled), Some("a"));
        assert_eq!(debouncer.poll(settled + WAIT), None);
    }

    #[test]
    fn test_retrigger_resets_deadline() {
        let mut debouncer: Debouncer<u32> = Debouncer::new(WAIT);
        let start = Instant::now();

        debouncer.trigger(1, start);
        // Re-trigger just before expiry supersedes the pending payload.
        debouncer.trigger(2, start + Duration::from_millis(299));

        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(599)),
            Some(2)
        );
    }

    #[test]
    fn test_immediate_fires_synchronously_once() {
        let mut debouncer: Debouncer<u32> = Debouncer::immediate(WAIT);
        let start = Instant::now();

        assert_eq!(debouncer.trigger(1, start), Some(1));
        // Inside the window: suppressed.
        assert_eq!(debouncer.trigger(2, start + Duration::from_millis(100)), None);
        // The trailing edge never fires in immediate mode.
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_immediate_refires_after_idle_window() {
        let mut debouncer: Debouncer<u32> = Debouncer::immediate(WAIT);
        let start = Instant::now();

        assert_eq!(debouncer.trigger(1, start), Some(1));
        // Window closes once polled past the deadline.
        assert_eq!(debouncer.poll(start + WAIT), None);
        assert_eq!(debouncer.trigger(2, start + WAIT), Some(2));
    }
}
