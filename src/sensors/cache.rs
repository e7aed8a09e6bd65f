//! Short-lived memoization of the sensor snapshot
//!
//! Every derived getter wants fresh data, but each refresh is a full bus
//! transaction. The cache coalesces reads inside a small staleness window
//! so a burst of getter calls costs one transaction.

use crate::sensors::SensorSnapshot;
use std::time::{Duration, Instant};

/// Holds the latest snapshot and decides when a re-read is due.
pub struct SensorCache {
    snapshot: SensorSnapshot,
    refreshed_at: Option<Instant>,
    /// Reads served from the cached snapshot
    hit_count: u32,
    /// Reads that went out to the bus
    refresh_count: u32,
}

impl SensorCache {
    pub fn new() -> Self {
        Self {
            snapshot: SensorSnapshot::zeroed(),
            refreshed_at: None,
            hit_count: 0,
            refresh_count: 0,
        }
    }

    /// Decide whether a read needs the bus. `true` means the caller must
    /// fetch and `store` a new snapshot; `false` means the cached one is
    /// inside the staleness window.
    pub fn needs_refresh(&mut self, max_age: Duration) -> bool {
        let stale = match self.refreshed_at {
            None => true,
            Some(at) => at.elapsed() > max_age,
        };
        if stale {
            self.refresh_count += 1;
        } else {
            self.hit_count += 1;
        }
        stale
    }

    /// Store a freshly received snapshot and restamp the window.
    pub fn store(&mut self, snapshot: SensorSnapshot) {
        self.snapshot = snapshot;
        self.refreshed_at = Some(Instant::now());
    }

    /// Force the next read to hit the bus (e.g. after an encoder reset).
    pub fn invalidate(&mut self) {
        self.refreshed_at = None;
    }

    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    /// Age of the cached snapshot, `None` before the first store.
    pub fn age(&self) -> Option<Duration> {
        self.refreshed_at.map(|at| at.elapsed())
    }

    /// (reads served from cache, reads that hit the bus)
    pub fn stats(&self) -> (u32, u32) {
        (self.hit_count, self.refresh_count)
    }
}

impl Default for SensorCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const WINDOW: Duration = Duration::from_millis(10);

    #[test]
    fn test_first_read_always_refreshes() {
        let mut cache = SensorCache::new();
        assert!(cache.needs_refresh(WINDOW));
    }

    #[test]
    fn test_reads_inside_window_coalesce() {
        let mut cache = SensorCache::new();
        assert!(cache.needs_refresh(WINDOW));
        cache.store(SensorSnapshot::zeroed());

        assert!(!cache.needs_refresh(WINDOW));
        assert!(!cache.needs_refresh(WINDOW));
        assert_eq!(cache.stats(), (2, 1));
    }

    #[test]
    fn test_read_after_expiry_refreshes_again() {
        let mut cache = SensorCache::new();
        assert!(cache.needs_refresh(WINDOW));
        cache.store(SensorSnapshot::zeroed());

        sleep(Duration::from_millis(15));
        assert!(cache.needs_refresh(WINDOW));
    }

    #[test]
    fn test_invalidate_forces_refresh() {
        let mut cache = SensorCache::new();
        cache.needs_refresh(WINDOW);
        cache.store(SensorSnapshot::zeroed());

        cache.invalidate();
        assert!(cache.needs_refresh(WINDOW));
        assert!(cache.age().is_none());
    }
}
