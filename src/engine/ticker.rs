use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::{PerturbationProfile, SIMULATION, SimulationMode},
    engine::{PerturbationSchedule, TrackedToken, perturb},
    models::TokenRecord,
    utils::{AppInstant, now_timestamp_ms},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Owns the token list and the fake market that moves it.
pub struct TickerEngine {
    tokens: Vec<TrackedToken>,
    schedule: PerturbationSchedule,
    rng: StdRng,
    paused: bool,
    mutation_count: u64,
}

impl TickerEngine {
    pub fn new(
        tokens: Vec<TokenRecord>,
        mode: SimulationMode,
        now: AppInstant,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let schedule =
            PerturbationSchedule::new(mode, SIMULATION.schedule, tokens.len(), now, &mut rng);
        Self {
            tokens: tokens.into_iter().map(TrackedToken::new).collect(),
            schedule,
            rng,
            paused: false,
            mutation_count: 0,
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &TokenRecord> {
        self.tokens.iter().map(|t| &t.current)
    }

    pub fn get(&self, id: &str) -> Option<&TokenRecord> {
        self.tokens.iter().map(|t| &t.current).find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn mode(&self) -> SimulationMode {
        self.schedule.mode()
    }

    pub fn set_mode(&mut self, mode: SimulationMode, now: AppInstant) {
        if mode == self.schedule.mode() {
            return;
        }
        self.schedule
            .set_mode(mode, self.tokens.len(), now, &mut self.rng);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Resuming restarts the timers so a long pause doesn't fire everything at once.
    pub fn set_paused(&mut self, paused: bool, now: AppInstant) {
        if self.paused && !paused {
            self.schedule.reset(self.tokens.len(), now, &mut self.rng);
        }
        self.paused = paused;
    }

    /// Total mutations applied since load.
    pub fn mutation_count(&self) -> u64 {
        self.mutation_count
    }

    pub fn next_deadline(&self) -> Option<AppInstant> {
        if self.paused || self.tokens.is_empty() {
            return None;
        }
        self.schedule.next_deadline()
    }

    /// Advance the fake market to `now`. Returns the ids of the records that moved.
    pub fn tick(&mut self, now: AppInstant) -> Vec<String> {
        self.tick_at(now, now_timestamp_ms())
    }

    /// `tick` with an explicit wall clock for `last_update`.
    pub fn tick_at(&mut self, now: AppInstant, now_ms: i64) -> Vec<String> {
        if self.paused {
            return Vec::new();
        }
        let due = self.schedule.due(now, self.tokens.len(), &mut self.rng);
        let profile = self.profile();

        let mut moved = Vec::with_capacity(due.len());
        for i in due {
            let tracked = &mut self.tokens[i];
            let next = perturb(
                &tracked.current,
                &tracked.anchor,
                &profile,
                &SIMULATION.drift,
                now_ms,
                &mut self.rng,
            );

            #[cfg(debug_assertions)]
            if DF.log_mutations {
                log::info!("{} -> {}", tracked.current, next);
            }

            moved.push(next.id.clone());
            tracked.replace(next);
            self.mutation_count += 1;
        }
        moved
    }

    fn profile(&self) -> PerturbationProfile {
        match self.schedule.mode() {
            SimulationMode::Burst => SIMULATION.burst,
            SimulationMode::Jitter => SIMULATION.jitter,
        }
    }
}
