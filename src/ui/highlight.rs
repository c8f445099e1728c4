use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use crate::{
    config::{FLASH, ViewMode},
    models::{TokenRecord, ValueSnapshot},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Which values moved since the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangedFields {
    pub price: bool,
    pub volume: bool,
    pub market_cap: bool,
}

impl ChangedFields {
    pub fn between(old: &ValueSnapshot, new: &ValueSnapshot) -> Self {
        Self {
            price: old.price != new.price,
            volume: old.volume_24h != new.volume_24h,
            market_cap: old.market_cap != new.market_cap,
        }
    }

    pub fn any(&self) -> bool {
        self.price || self.volume || self.market_cap
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            price: self.price || other.price,
            volume: self.volume || other.volume,
            market_cap: self.market_cap || other.market_cap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Idle,
    Flashing,
}

/// Animation inputs for a flashing record.
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    /// 0..=1 across the pulse animation, pinned at 1 for the rest of the hold.
    pub progress: f32,
    pub fields: ChangedFields,
    /// Sign of `change_24h` when the flash (re)started.
    pub positive: bool,
}

/// How long the pulse animates and how long the record counts as "changed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTiming {
    pub pulse: Duration,
    pub hold: Duration,
}

impl FlashTiming {
    pub const ROW: FlashTiming = FlashTiming {
        pulse: FLASH.row_pulse,
        hold: FLASH.row_hold,
    };
    pub const CARD: FlashTiming = FlashTiming {
        pulse: FLASH.card_hold,
        hold: FLASH.card_hold,
    };

    pub fn for_view(view: ViewMode) -> Self {
        match view {
            ViewMode::List => Self::ROW,
            ViewMode::Grid => Self::CARD,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveFlash {
    started: AppInstant,
    fields: ChangedFields,
    positive: bool,
}

/// Remembers the last values seen per id and runs the Idle -> Flashing -> Idle cycle.
/// Purely visual: records are only read.
#[derive(Debug)]
pub struct HighlightTracker {
    timing: FlashTiming,
    snapshots: HashMap<String, ValueSnapshot>,
    active: HashMap<String, ActiveFlash>,
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new(FlashTiming::ROW)
    }
}

impl HighlightTracker {
    pub fn new(timing: FlashTiming) -> Self {
        Self {
            timing,
            snapshots: HashMap::new(),
            active: HashMap::new(),
        }
    }

    pub fn timing(&self) -> FlashTiming {
        self.timing
    }

    /// Running flashes keep their start time and pick up the new durations.
    pub fn set_timing(&mut self, timing: FlashTiming) {
        self.timing = timing;
    }

    /// Compare `record` with the last snapshot for its id. Returns the changed fields when a
    /// flash (re)starts. The first sighting of an id only stores the snapshot.
    pub fn observe(&mut self, record: &TokenRecord, now: AppInstant) -> Option<ChangedFields> {
        let snapshot = record.values();
        let previous = self.snapshots.insert(record.id.clone(), snapshot)?;

        let changed = ChangedFields::between(&previous, &snapshot);
        if !changed.any() {
            return None;
        }

        let fields = match self.live(&record.id, now) {
            Some(running) => running.fields.merge(changed),
            None => changed,
        };

        #[cfg(debug_assertions)]
        if DF.log_highlights {
            log::info!("Flash {} {:?}", record.symbol, fields);
        }

        self.active.insert(
            record.id.clone(),
            ActiveFlash {
                started: now,
                fields,
                positive: record.is_positive(),
            },
        );
        Some(changed)
    }

    pub fn phase(&self, id: &str, now: AppInstant) -> FlashPhase {
        match self.live(id, now) {
            Some(_) => FlashPhase::Flashing,
            None => FlashPhase::Idle,
        }
    }

    pub fn pulse(&self, id: &str, now: AppInstant) -> Option<Pulse> {
        let flash = self.live(id, now)?;
        let elapsed = now.saturating_duration_since(flash.started);
        let pulse_secs = self.timing.pulse.as_secs_f32();
        let progress = if pulse_secs > 0.0 {
            (elapsed.as_secs_f32() / pulse_secs).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Some(Pulse {
            progress,
            fields: flash.fields,
            positive: flash.positive,
        })
    }

    /// True while any record is mid-flash.
    pub fn is_animating(&self, now: AppInstant) -> bool {
        self.active
            .values()
            .any(|f| now.saturating_duration_since(f.started) < self.timing.hold)
    }

    /// Drop expired flashes.
    pub fn prune(&mut self, now: AppInstant) {
        let hold = self.timing.hold;
        self.active
            .retain(|_, f| now.saturating_duration_since(f.started) < hold);
    }

    /// Forget every id not in `ids`.
    pub fn retain<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = ids.into_iter().collect();
        self.snapshots.retain(|id, _| keep.contains(id.as_str()));
        self.active.retain(|id, _| keep.contains(id.as_str()));
    }

    fn live(&self, id: &str, now: AppInstant) -> Option<&ActiveFlash> {
        self.active
            .get(id)
            .filter(|f| now.saturating_duration_since(f.started) < self.timing.hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, price: f64, volume: f64, mcap: f64) -> TokenRecord {
        TokenRecord {
            id: id.to_string(),
            name: "Quantum Labs Coin".to_string(),
            symbol: "QLC".to_string(),
            price,
            change_24h: 1.5,
            volume_24h: volume,
            market_cap: mcap,
            last_update: 0,
            supply: None,
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_sighting_only_records() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::default();
        assert_eq!(tracker.observe(&record("a", 1.0, 2.0, 3.0), t0), None);
        assert_eq!(tracker.phase("a", t0), FlashPhase::Idle);
        assert!(tracker.pulse("a", t0).is_none());
    }

    #[test]
    fn value_change_starts_flash_and_expires() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::new(FlashTiming::ROW);
        tracker.observe(&record("a", 1.0, 2.0, 3.0), t0);

        let changed = tracker.observe(&record("a", 1.1, 2.0, 3.0), t0).unwrap();
        assert_eq!(
            changed,
            ChangedFields {
                price: true,
                volume: false,
                market_cap: false
            }
        );
        assert_eq!(tracker.phase("a", t0 + ms(699)), FlashPhase::Flashing);
        assert_eq!(tracker.phase("a", t0 + ms(700)), FlashPhase::Idle);
        assert!(!tracker.is_animating(t0 + ms(700)));
    }

    #[test]
    fn identity_only_differences_never_flash() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::default();
        let base = record("a", 1.0, 2.0, 3.0);
        tracker.observe(&base, t0);

        let mut renamed = base.clone();
        renamed.name = "Other Name".to_string();
        renamed.symbol = "ZZZ".to_string();
        renamed.change_24h = -40.0;
        renamed.last_update = 99;
        assert_eq!(tracker.observe(&renamed, t0), None);
        assert_eq!(tracker.phase("a", t0), FlashPhase::Idle);
    }

    #[test]
    fn each_tracked_field_triggers() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::default();
        tracker.observe(&record("a", 1.0, 2.0, 3.0), t0);
        assert!(tracker.observe(&record("a", 1.0, 2.5, 3.0), t0).unwrap().volume);
        assert!(tracker.observe(&record("a", 1.0, 2.5, 3.5), t0).unwrap().market_cap);
    }

    #[test]
    fn mid_flash_change_restarts_and_merges() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::new(FlashTiming::ROW);
        tracker.observe(&record("a", 1.0, 2.0, 3.0), t0);
        tracker.observe(&record("a", 1.1, 2.0, 3.0), t0);

        let t1 = t0 + ms(400);
        tracker.observe(&record("a", 1.1, 2.2, 3.0), t1);

        // would have expired at t0 + 700 without the restart
        assert_eq!(tracker.phase("a", t0 + ms(900)), FlashPhase::Flashing);
        let pulse = tracker.pulse("a", t1).unwrap();
        assert!(pulse.fields.price && pulse.fields.volume);
        assert_eq!(pulse.progress, 0.0);
        assert_eq!(tracker.phase("a", t1 + ms(700)), FlashPhase::Idle);
    }

    #[test]
    fn pulse_progress_pins_after_animation() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::new(FlashTiming::ROW);
        tracker.observe(&record("a", 1.0, 2.0, 3.0), t0);
        tracker.observe(&record("a", 2.0, 2.0, 3.0), t0);

        let half = tracker.pulse("a", t0 + ms(250)).unwrap();
        assert!((half.progress - 0.5).abs() < 1e-3);
        assert!(half.positive);
        assert_eq!(tracker.pulse("a", t0 + ms(600)).unwrap().progress, 1.0);
    }

    #[test]
    fn card_timing_holds_longer() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::new(FlashTiming::for_view(ViewMode::Grid));
        tracker.observe(&record("a", 1.0, 2.0, 3.0), t0);
        tracker.observe(&record("a", 1.5, 2.0, 3.0), t0);
        assert_eq!(tracker.phase("a", t0 + ms(750)), FlashPhase::Flashing);
        assert_eq!(tracker.phase("a", t0 + ms(800)), FlashPhase::Idle);
    }

    #[test]
    fn retain_and_prune_forget_state() {
        let t0 = AppInstant::now();
        let mut tracker = HighlightTracker::default();
        for id in ["a", "b"] {
            tracker.observe(&record(id, 1.0, 2.0, 3.0), t0);
            tracker.observe(&record(id, 2.0, 2.0, 3.0), t0);
        }
        tracker.retain(["b"]);
        assert_eq!(tracker.phase("a", t0), FlashPhase::Idle);
        // "a" is new again, so this is a first sighting
        assert_eq!(tracker.observe(&record("a", 5.0, 2.0, 3.0), t0), None);

        tracker.prune(t0 + ms(1000));
        assert!(!tracker.is_animating(t0 + ms(1000)));
        assert!(tracker.observe(&record("b", 3.0, 2.0, 3.0), t0 + ms(1000)).is_some());
    }
}
