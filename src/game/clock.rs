//! Virtual timer scheduler for the game loop.
//!
//! Replaces wall-clock timeouts with explicit, cancellable deadlines so the
//! single-outstanding-timer rule is enforced by construction and tests can
//! drive time directly. Time is `f64` milliseconds since machine creation.

/// The two timers the game ever arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Advance to the next color in the round
    NextColor,
    /// The shown target was not tapped in time
    TargetTimeout,
}

/// Cooperative two-slot scheduler.
///
/// Each slot holds at most one absolute deadline; scheduling into an occupied
/// slot replaces the stale deadline, and cancellation is synchronous - a
/// cleared deadline can never fire.
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    now_ms: f64,
    next_color: Option<f64>,
    target_timeout: Option<f64>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Arm the next-color timer `delay_ms` from now, replacing any pending one.
    pub fn schedule_next_color(&mut self, delay_ms: f64) {
        self.next_color = Some(self.now_ms + delay_ms);
    }

    /// Arm the target timeout `delay_ms` from now, replacing any pending one.
    pub fn schedule_target_timeout(&mut self, delay_ms: f64) {
        self.target_timeout = Some(self.now_ms + delay_ms);
    }

    pub fn cancel_target_timeout(&mut self) {
        self.target_timeout = None;
    }

    pub fn cancel_all(&mut self) {
        self.next_color = None;
        self.target_timeout = None;
    }

    /// Pending deadline for a timer, if armed.
    pub fn deadline(&self, timer: Timer) -> Option<f64> {
        match timer {
            Timer::NextColor => self.next_color,
            Timer::TargetTimeout => self.target_timeout,
        }
    }

    /// Earliest deadline due at or before `until_ms`.
    ///
    /// On an exact tie the target timeout wins: it was armed earlier in the
    /// same turn than the competing color change.
    fn earliest_due(&self, until_ms: f64) -> Option<(f64, Timer)> {
        let timeout = self.target_timeout.filter(|&at| at <= until_ms);
        let next = self.next_color.filter(|&at| at <= until_ms);
        match (timeout, next) {
            (Some(t), Some(n)) if n < t => Some((n, Timer::NextColor)),
            (Some(t), _) => Some((t, Timer::TargetTimeout)),
            (None, Some(n)) => Some((n, Timer::NextColor)),
            (None, None) => None,
        }
    }

    /// Jump to the earliest due deadline at or before `until_ms` and return
    /// the fired timer (clearing its slot), or jump to `until_ms` and return
    /// `None` when nothing is due.
    pub fn advance_to(&mut self, until_ms: f64) -> Option<Timer> {
        debug_assert!(until_ms >= self.now_ms);
        match self.earliest_due(until_ms) {
            Some((at, timer)) => {
                self.now_ms = at;
                match timer {
                    Timer::NextColor => self.next_color = None,
                    Timer::TargetTimeout => self.target_timeout = None,
                }
                Some(timer)
            }
            None => {
                self.now_ms = until_ms;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_without_timers_moves_time() {
        let mut clock = GameClock::new();
        assert_eq!(clock.advance_to(250.0), None);
        assert_eq!(clock.now_ms(), 250.0);
    }

    #[test]
    fn test_fires_at_deadline_and_clears_slot() {
        let mut clock = GameClock::new();
        clock.schedule_next_color(100.0);
        assert_eq!(clock.advance_to(100.0), Some(Timer::NextColor));
        assert_eq!(clock.now_ms(), 100.0);
        assert_eq!(clock.deadline(Timer::NextColor), None);
        // Nothing left to fire
        assert_eq!(clock.advance_to(500.0), None);
    }

    #[test]
    fn test_not_due_yet_stays_armed() {
        let mut clock = GameClock::new();
        clock.schedule_next_color(100.0);
        assert_eq!(clock.advance_to(99.0), None);
        assert_eq!(clock.now_ms(), 99.0);
        assert_eq!(clock.deadline(Timer::NextColor), Some(100.0));
    }

    #[test]
    fn test_rescheduling_replaces_stale_deadline() {
        let mut clock = GameClock::new();
        clock.schedule_next_color(100.0);
        clock.schedule_next_color(50.0);
        assert_eq!(clock.advance_to(200.0), Some(Timer::NextColor));
        assert_eq!(clock.now_ms(), 50.0);
        // The 100ms deadline was replaced, not queued
        assert_eq!(clock.advance_to(200.0), None);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut clock = GameClock::new();
        clock.schedule_target_timeout(100.0);
        clock.cancel_target_timeout();
        assert_eq!(clock.advance_to(1000.0), None);

        clock.schedule_next_color(10.0);
        clock.schedule_target_timeout(20.0);
        clock.cancel_all();
        assert_eq!(clock.advance_to(1000.0), None);
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut clock = GameClock::new();
        clock.schedule_target_timeout(300.0);
        clock.schedule_next_color(100.0);
        assert_eq!(clock.advance_to(1000.0), Some(Timer::NextColor));
        assert_eq!(clock.now_ms(), 100.0);
        assert_eq!(clock.advance_to(1000.0), Some(Timer::TargetTimeout));
        assert_eq!(clock.now_ms(), 300.0);
    }

    #[test]
    fn test_target_timeout_wins_exact_tie() {
        let mut clock = GameClock::new();
        clock.schedule_next_color(100.0);
        clock.schedule_target_timeout(100.0);
        assert_eq!(clock.advance_to(100.0), Some(Timer::TargetTimeout));
        assert_eq!(clock.advance_to(100.0), Some(Timer::NextColor));
    }
}
