use std::time::{Duration, Instant};

/// Length of one countdown cycle; also the initial distance to the deadline.
pub const CYCLE: Duration = Duration::from_secs(2 * 60);

/// How far Left/Right move the deadline.
pub const NUDGE: Duration = Duration::from_secs(1);

/// Remaining time at which the alert sound fires.
pub const ALERT_AT: Duration = Duration::from_secs(15);

/// The single deadline the timer counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    /// A fresh cycle ending `CYCLE` after `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            deadline: now + CYCLE,
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self { deadline }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Re-arms the deadline one cycle later if `now` is past it.
    ///
    /// Moves by a single cycle per call; a deadline several cycles behind catches up over
    /// several calls. Returns whether the deadline moved.
    pub fn roll_over(&mut self, now: Instant) -> bool {
        if now > self.deadline {
            self.deadline += CYCLE;
            return true;
        }
        false
    }

    pub fn reset(&mut self, now: Instant) {
        self.deadline = now;
    }

    pub fn nudge_back(&mut self) {
        // `Instant` can't go before the platform's epoch; leave the deadline alone there.
        if let Some(earlier) = self.deadline.checked_sub(NUDGE) {
            self.deadline = earlier;
        }
    }

    pub fn nudge_forward(&mut self) {
        self.deadline += NUDGE;
    }

    /// `abs(round_to_second(now - deadline))`, whichever side of the deadline `now` is on.
    pub fn remaining(&self, now: Instant) -> Duration {
        let diff = if now >= self.deadline {
            now - self.deadline
        } else {
            self.deadline - now
        };
        round_to_second(diff)
    }
}

/// Rounds to the nearest whole second, halves away from zero.
pub fn round_to_second(d: Duration) -> Duration {
    let mut secs = d.as_secs();
    if d.subsec_nanos() >= 500_000_000 {
        secs += 1;
    }
    Duration::from_secs(secs)
}

/// `MM:SS`, minutes zero-padded to two digits but not capped.
pub fn format_mm_ss(remaining: Duration) -> String {
    let total = remaining.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
