//! # Navigation
//!
//! Owns the active user id. Every change bumps a generation counter and
//! yields a `NavigationEvent`; fetch completions carry the generation they
//! were issued under so stale results can be recognised and dropped.

use log::debug;

use crate::core::cycle::UserId;

/// Monotonic stamp identifying one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Signals that the active user switched and a new fetch cycle is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub user_id: UserId,
    pub generation: Generation,
}

#[derive(Debug, Default)]
pub struct NavigationController {
    current: UserId,
    generation: Generation,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> UserId {
        self.current
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn go_next(&mut self) -> NavigationEvent {
        self.go_to(self.current.next())
    }

    pub fn go_previous(&mut self) -> NavigationEvent {
        self.go_to(self.current.previous())
    }

    /// Jumps to `id`. Used at startup; also the common path for next/previous.
    pub fn go_to(&mut self, id: UserId) -> NavigationEvent {
        self.current = id;
        self.generation = self.generation.next();
        debug!(
            "Navigated to user {} (generation {})",
            id,
            self.generation.get()
        );
        NavigationEvent {
            user_id: id,
            generation: self.generation,
        }
    }

    /// True only for the generation of the latest navigation.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_user() {
        let nav = NavigationController::new();
        assert_eq!(nav.current(), UserId::FIRST);
        assert_eq!(nav.generation().get(), 0);
    }

    #[test]
    fn test_go_previous_from_first_wraps() {
        let mut nav = NavigationController::new();
        let event = nav.go_previous();
        assert_eq!(event.user_id.get(), 30);
        assert_eq!(nav.current().get(), 30);
    }

    #[test]
    fn test_every_move_bumps_generation() {
        let mut nav = NavigationController::new();
        let first = nav.go_to(UserId::FIRST);
        let second = nav.go_next();
        let third = nav.go_previous();
        assert!(first.generation < second.generation);
        assert!(second.generation < third.generation);
        assert_eq!(third.user_id, UserId::FIRST);
    }

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut nav = NavigationController::new();
        let old = nav.go_to(UserId::new(5).unwrap());
        let new = nav.go_next();
        assert!(!nav.is_current(old.generation));
        assert!(nav.is_current(new.generation));
        assert_eq!(new.user_id.get(), 6);
    }
}
