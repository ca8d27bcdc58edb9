//! # User Id Cycle
//!
//! The browser walks a closed pool of user records. Ids live in `[1, POOL_SIZE]`
//! and wrap in both directions:
//!
//! ```text
//!   previous            next
//!  30 ◀── 1 ── 2 ── … ── 29 ── 30 ──▶ 1
//! ```
//!
//! `UserId` can only be built through validated constructors, so code that
//! holds one never has to re-check the range.

use std::fmt;

/// Number of user records in the pool.
pub const POOL_SIZE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u32);

impl UserId {
    pub const FIRST: UserId = UserId(1);
    pub const LAST: UserId = UserId(POOL_SIZE);

    /// Returns `None` when `raw` is outside the pool.
    pub fn new(raw: u32) -> Option<Self> {
        is_valid(raw).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Next id, wrapping `POOL_SIZE` back to 1.
    pub fn next(self) -> Self {
        if self.0 >= POOL_SIZE {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous id, wrapping 1 around to `POOL_SIZE`.
    pub fn previous(self) -> Self {
        if self.0 <= 1 {
            Self::LAST
        } else {
            Self(self.0 - 1)
        }
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// True when `raw` names a record in the pool.
pub fn is_valid(raw: u32) -> bool {
    (1..=POOL_SIZE).contains(&raw)
}

pub fn next(id: UserId) -> UserId {
    id.next()
}

pub fn previous(id: UserId) -> UserId {
    id.previous()
}
