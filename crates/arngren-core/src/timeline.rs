//! Virtual-time driver.
//!
//! Runs a [`Storefront`] against a simulated clock: `Schedule` effects are
//! queued by due time and fired as time advances, every other effect is
//! recorded with the time it was emitted.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::effect::Effect;
use crate::intent::Intent;
use crate::scheduler::TaskId;
use crate::store::Storefront;

/// A storefront plus a simulated clock starting at zero.
#[derive(Debug, Clone)]
pub struct Timeline {
    storefront: Storefront,
    now: Duration,
    seq: u64,
    timers: BTreeMap<(Duration, u64), TaskId>,
    log: Vec<(Duration, Effect)>,
}

impl Timeline {
    /// Start a timeline at t = 0.
    pub fn new(storefront: Storefront) -> Self {
        Self {
            storefront,
            now: Duration::ZERO,
            seq: 0,
            timers: BTreeMap::new(),
            log: Vec::new(),
        }
    }

    /// Current simulated time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The driven state.
    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Apply an intent now. Returns the non-timer effects it produced.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let effects = self.storefront.apply(intent);
        self.run(effects)
    }

    /// Advance to `at`, firing every timer due on the way in order.
    ///
    /// Timers scheduled by fired timers are honored if they fall due
    /// before `at`. Returns the non-timer effects produced.
    pub fn advance_to(&mut self, at: Duration) -> Vec<Effect> {
        let mut out = Vec::new();
        while let Some(entry) = self.timers.first_entry() {
            let (due, _) = *entry.key();
            if due > at {
                break;
            }
            let task = entry.remove();
            self.now = due;
            let effects = self.storefront.apply(Intent::TimerFired(task));
            out.extend(self.run(effects));
        }
        self.now = self.now.max(at);
        out
    }

    /// Advance by `delta` from the current time.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Effect> {
        self.advance_to(self.now + delta)
    }

    /// Fire everything still pending.
    pub fn settle(&mut self) -> Vec<Effect> {
        let mut out = Vec::new();
        while let Some((&(due, _), _)) = self.timers.first_key_value() {
            out.extend(self.advance_to(due));
        }
        out
    }

    /// Every non-timer effect so far, stamped with its time.
    pub fn effects(&self) -> &[(Duration, Effect)] {
        &self.log
    }

    /// Number of timers not yet elapsed.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn run(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut out = Vec::new();
        for effect in effects {
            match effect {
                Effect::Schedule { task, delay } => {
                    self.seq += 1;
                    self.timers.insert((self.now + delay, self.seq), task);
                }
                other => {
                    self.log.push((self.now, other.clone()));
                    out.push(other);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::navigation::{Section, View};
    use crate::preferences::Preferences;
    use arngren_commerce::catalog::Catalog;

    fn timeline() -> Timeline {
        Timeline::new(Storefront::new(
            StoreConfig::default(),
            Catalog::builtin(),
            Preferences::default(),
        ))
    }

    #[test]
    fn test_deferred_scroll_fires_at_100ms() {
        let mut tl = timeline();
        tl.dispatch(Intent::go(View::Privacy));
        assert!(tl.dispatch(Intent::NavigateToSection(Section::NewArrivals)).is_empty());

        assert!(tl.advance_to(Duration::from_millis(99)).is_empty());
        let effects = tl.advance_to(Duration::from_millis(100));
        assert_eq!(effects, vec![Effect::ScrollToSection(Section::NewArrivals)]);
        assert_eq!(tl.effects().last().unwrap().0, Duration::from_millis(100));
    }

    #[test]
    fn test_settle_drains_timers() {
        let mut tl = timeline();
        tl.dispatch(Intent::Notify {
            message: "hi".into(),
            severity: Default::default(),
        });
        tl.settle();
        assert_eq!(tl.pending_timers(), 0);
        assert_eq!(tl.now(), Duration::from_millis(3300));
        assert!(tl.storefront().notifications().is_empty());
    }

    #[test]
    fn test_time_never_goes_backwards() {
        let mut tl = timeline();
        tl.advance_to(Duration::from_millis(500));
        tl.advance_to(Duration::from_millis(200));
        assert_eq!(tl.now(), Duration::from_millis(500));
    }
}
