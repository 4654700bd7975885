use crate::shared::format::format_time_remaining;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifetime of a freshly generated pay-by link: 24 hours.
pub const PAY_LINK_TTL_SECS: u64 = 86_400;

/// Seconds left before the pay-by link expires.
///
/// Driven by a one-second tick from the page; never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    initial: u64,
}

impl Countdown {
    pub fn new(initial: u64) -> Self {
        Self {
            remaining: initial,
            initial,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Restart from the initial value (the "regenerate" action).
    pub fn reset(&mut self) {
        self.remaining = self.initial;
    }

    pub fn label(&self) -> String {
        format_time_remaining(self.remaining)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(PAY_LINK_TTL_SECS)
    }
}

/// Shared switch telling a ticking task that its owner is gone.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One wake-up of a ticker loop.
///
/// `tick` is not called once `stop` is set; it returns false when its target
/// no longer exists, which also ends the loop.
pub fn ticker_step(stop: &StopFlag, tick: impl FnOnce() -> bool) -> ControlFlow<()> {
    if stop.is_stopped() || !tick() {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

/// Confirmation that shows on an action and hides after a delay.
///
/// Each `show` starts a new generation; an `expire` from an older generation
/// is ignored, so repeated actions keep the confirmation up for the full delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flash {
    generation: u64,
    visible: bool,
}

impl Flash {
    /// Make the confirmation visible; returns the generation to expire later.
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_down() {
        let mut countdown = Countdown::default();
        for _ in 0..5 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 86_395);
        assert_eq!(countdown.label(), "23h : 59m : 55s");
    }

    #[test]
    fn test_floors_at_zero() {
        let mut countdown = Countdown::new(2);
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut countdown = Countdown::default();
        countdown.tick();
        countdown.reset();
        assert_eq!(countdown.remaining(), PAY_LINK_TTL_SECS);

        let mut expired = Countdown::new(1);
        expired.tick();
        expired.reset();
        assert_eq!(expired.remaining(), 1);
    }

    #[test]
    fn test_ticker_runs_until_stopped() {
        let stop = StopFlag::new();
        let mut countdown = Countdown::new(10);

        for _ in 0..3 {
            let step = ticker_step(&stop, || {
                countdown.tick();
                true
            });
            assert_eq!(step, ControlFlow::Continue(()));
        }
        assert_eq!(countdown.remaining(), 7);

        // owner cleanup flips the shared flag held by the task
        let owner_side = stop.clone();
        owner_side.stop();

        let step = ticker_step(&stop, || {
            countdown.tick();
            true
        });
        assert_eq!(step, ControlFlow::Break(()));
        assert_eq!(countdown.remaining(), 7);
    }

    #[test]
    fn test_ticker_stops_when_target_is_gone() {
        let stop = StopFlag::new();
        let mut disposed: Option<Countdown> = None;

        let step = ticker_step(&stop, || disposed.as_mut().map(Countdown::tick).is_some());
        assert_eq!(step, ControlFlow::Break(()));
        assert!(!stop.is_stopped());
    }

    #[test]
    fn test_flash_hides_after_its_own_expiry() {
        let mut flash = Flash::default();
        assert!(!flash.is_visible());
        let generation = flash.show();
        assert!(flash.is_visible());
        flash.expire(generation);
        assert!(!flash.is_visible());
    }

    #[test]
    fn test_flash_second_show_outlives_first_timer() {
        let mut flash = Flash::default();
        let first = flash.show();
        let second = flash.show();

        flash.expire(first);
        assert!(flash.is_visible());

        flash.expire(second);
        assert!(!flash.is_visible());
    }
}
