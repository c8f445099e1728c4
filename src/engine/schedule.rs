use {
    rand::{Rng, seq::index},
    std::time::Duration,
};

use crate::{
    config::{ScheduleConfig, SimulationMode},
    utils::AppInstant,
};

/// Decides which records move on a given frame. Time is always passed in.
#[derive(Debug, Clone)]
pub struct PerturbationSchedule {
    mode: SimulationMode,
    config: ScheduleConfig,
    next_burst: AppInstant,
    /// Jitter mode: when each record fires next.
    due: Vec<AppInstant>,
}

impl PerturbationSchedule {
    pub fn new<R: Rng + ?Sized>(
        mode: SimulationMode,
        config: ScheduleConfig,
        len: usize,
        now: AppInstant,
        rng: &mut R,
    ) -> Self {
        let mut schedule = Self {
            mode,
            next_burst: now + config.burst_period,
            config,
            due: Vec::new(),
        };
        schedule.reset(len, now, rng);
        schedule
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn set_mode<R: Rng + ?Sized>(
        &mut self,
        mode: SimulationMode,
        len: usize,
        now: AppInstant,
        rng: &mut R,
    ) {
        self.mode = mode;
        self.reset(len, now, rng);
    }

    /// Restart every timer from `now`, as if the schedule had just been created.
    pub fn reset<R: Rng + ?Sized>(&mut self, len: usize, now: AppInstant, rng: &mut R) {
        self.next_burst = now + self.config.burst_period;
        self.due = (0..len).map(|_| now + self.jitter_interval(rng)).collect();
    }

    /// Indices of the records to mutate at `now`. Each index appears at most once.
    pub fn due<R: Rng + ?Sized>(&mut self, now: AppInstant, len: usize, rng: &mut R) -> Vec<usize> {
        if len == 0 {
            return Vec::new();
        }
        match self.mode {
            SimulationMode::Burst => self.due_burst(now, len, rng),
            SimulationMode::Jitter => self.due_jitter(now, len, rng),
        }
    }

    /// Earliest instant at which `due` can return something.
    pub fn next_deadline(&self) -> Option<AppInstant> {
        match self.mode {
            SimulationMode::Burst => Some(self.next_burst),
            SimulationMode::Jitter => self.due.iter().min().copied(),
        }
    }

    fn due_burst<R: Rng + ?Sized>(&mut self, now: AppInstant, len: usize, rng: &mut R) -> Vec<usize> {
        if now < self.next_burst {
            return Vec::new();
        }
        self.next_burst += self.config.burst_period;
        if self.next_burst <= now {
            // Stalled frame: skip the missed ticks rather than replaying them.
            self.next_burst = now + self.config.burst_period;
        }

        let lo = (*self.config.burst_batch.start()).max(1);
        let hi = (*self.config.burst_batch.end()).max(lo);
        let amount = rng.gen_range(lo..=hi).min(len);
        index::sample(rng, len, amount).into_vec()
    }

    fn due_jitter<R: Rng + ?Sized>(&mut self, now: AppInstant, len: usize, rng: &mut R) -> Vec<usize> {
        if self.due.len() != len {
            // Records were added or removed underneath us.
            let fresh = now + self.jitter_interval(rng);
            self.due.resize(len, fresh);
        }

        let mut fired = Vec::new();
        for i in 0..len {
            if now >= self.due[i] {
                fired.push(i);
                self.due[i] = now + self.jitter_interval(rng);
            }
        }
        fired
    }

    fn jitter_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let lo = *self.config.jitter_interval_ms.start();
        let hi = (*self.config.jitter_interval_ms.end()).max(lo);
        Duration::from_millis(rng.gen_range(lo..=hi))
    }
}
