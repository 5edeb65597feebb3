//! The client's view of the story lock.
//!
//! The server grants a lock with a token and a number of seconds. The client
//! counts those seconds down on its own and never asks the server whether
//! the lock is still valid; a submission with a token the server already
//! expired is simply rejected there.

use crate::model::LockGrant;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Reservation {
    #[default]
    Idle,
    /// A `lock_story` request is in flight.
    Locking,
    Held {
        token: String,
        remaining: i64,
    },
    /// The countdown ran out. Stays here until [`Reservation::reset`].
    Expired,
    /// A paragraph was submitted with the token. Stays here until
    /// [`Reservation::reset`].
    Consumed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is counting down.
    Stopped,
    Remaining(i64),
    Expired,
}

impl Reservation {
    /// Moves `Idle` to `Locking`. Returns false (and changes nothing) in any
    /// other state, so at most one lock request is ever outstanding.
    pub fn begin_lock(&mut self) -> bool {
        if *self != Reservation::Idle {
            return false;
        }
        *self = Reservation::Locking;
        true
    }

    /// Returns the seconds to display, or `None` if no request was pending.
    pub fn lock_granted(&mut self, grant: &LockGrant) -> Option<i64> {
        if *self != Reservation::Locking {
            return None;
        }
        let remaining = grant.seconds();
        *self = Reservation::Held {
            token: grant.auth.clone(),
            remaining,
        };
        Some(remaining)
    }

    pub fn lock_failed(&mut self) {
        if *self == Reservation::Locking {
            *self = Reservation::Idle;
        }
    }

    /// One second of countdown.
    pub fn tick(&mut self) -> Tick {
        let Reservation::Held { remaining, .. } = self else {
            return Tick::Stopped;
        };
        *remaining -= 1;
        if *remaining < 0 {
            *self = Reservation::Expired;
            return Tick::Expired;
        }
        Tick::Remaining(*remaining)
    }

    pub fn consume(&mut self) -> bool {
        if !self.has_auth() {
            return false;
        }
        *self = Reservation::Consumed;
        true
    }

    /// Back to `Idle` from `Expired` or `Consumed`.
    pub fn reset(&mut self) -> bool {
        match self {
            Reservation::Expired | Reservation::Consumed => {
                *self = Reservation::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Reservation::Held { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn has_auth(&self) -> bool {
        self.token().is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reservation::Idle => "idle",
            Reservation::Locking => "locking",
            Reservation::Held { .. } => "held",
            Reservation::Expired => "expired",
            Reservation::Consumed => "consumed",
        }
    }
}

#[cfg(test)]
#[path = "tests/reservation_tests.rs"]
mod tests;
