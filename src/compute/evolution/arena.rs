//! The evolution arena: nine grids, a generation clock, and the selection
//! and mutation step that runs at each generation boundary.

use std::collections::VecDeque;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::compute::{Coord, GridBounds, LiveCells, PopulationGrid, WeightVector};
use crate::schema::{ARENA_SIDE, ArenaConfig, ConfigError, GRID_COUNT, Pattern};

use super::genome::{Perturbation, WeightRng};
use super::selection::{rank, slot_list};

/// Summary of one completed generation.
#[derive(Debug, Clone)]
pub struct GenerationRecord {
    /// Generation that just ended.
    pub generation: u64,
    /// Final live-cell count per grid, row-major.
    pub scores: [usize; GRID_COUNT],
    /// Grid indices, best first.
    pub ranking: Vec<usize>,
    /// Weights of the top-ranked grid before mutation.
    pub champion: WeightVector,
    /// Shuffled source grid for each next-generation slot.
    pub slots: Vec<usize>,
    /// Mutations applied to the next generation's weights.
    pub mutations: Vec<Perturbation>,
}

/// What a single `tick()` did.
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// A generation boundary was processed before stepping.
    pub boundary: Option<GenerationRecord>,
    /// The grids advanced one simulation step.
    pub stepped: bool,
}

/// Point-in-time statistics for the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaStats {
    pub generation: u64,
    pub step: u32,
    pub paused: bool,
    pub scores: [usize; GRID_COUNT],
    pub total_live: usize,
    /// Top-ranked grid (lowest index on ties).
    pub best_grid: usize,
}

impl ArenaStats {
    /// Compute statistics from the arena.
    pub fn from_arena(arena: &EvolutionArena) -> Self {
        let scores = arena.grid_scores();
        Self {
            generation: arena.current_generation(),
            step: arena.current_step(),
            paused: arena.is_paused(),
            scores,
            total_live: scores.iter().sum(),
            best_grid: rank(&scores)[0],
        }
    }
}

/// Nine weighted automata evolving side by side.
///
/// Grids are addressed either by flat index `row * 3 + col` or by
/// `(grid_row, grid_col)`.
pub struct EvolutionArena {
    config: ArenaConfig,
    rng: WeightRng,
    grids: [PopulationGrid; GRID_COUNT],
    /// Running ticks since the last simulation step.
    frame: u32,
    /// Simulation steps into the current generation.
    step: u32,
    generation: u64,
    paused: bool,
    history: VecDeque<GenerationRecord>,
}

impl EvolutionArena {
    /// Create an arena with random weights and centre-seeded grids.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.random_seed.unwrap_or_else(rand::random);
        debug!("arena seed {seed}");
        let mut rng = WeightRng::new(seed);

        let bounds = GridBounds::new(config.width, config.height);
        let grids = std::array::from_fn(|_| {
            let weights = rng.random_weights(config.initial_weights);
            PopulationGrid::new(bounds, weights)
        });

        let mut arena = Self {
            config,
            rng,
            grids,
            frame: 0,
            step: 0,
            generation: 0,
            paused: false,
            history: VecDeque::new(),
        };
        arena.reseed_grids();
        Ok(arena)
    }

    /// Create an arena from explicit grids, e.g. hand-built patterns.
    pub fn from_grids(
        config: ArenaConfig,
        grids: [PopulationGrid; GRID_COUNT],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.random_seed.unwrap_or_else(rand::random);

        Ok(Self {
            config,
            rng: WeightRng::new(seed),
            grids,
            frame: 0,
            step: 0,
            generation: 0,
            paused: false,
            history: VecDeque::new(),
        })
    }

    /// Advance the arena by one frame.
    ///
    /// A pending generation boundary is processed first. While running, every
    /// `frames_per_step` ticks advance all grids by one step.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.step >= self.config.steps_per_generation {
            outcome.boundary = Some(self.advance_generation());
        }

        if !self.paused {
            self.frame += 1;
        }
        if self.frame >= self.config.frames_per_step {
            self.frame = 0;
            self.step_once();
            outcome.stepped = true;
        }

        outcome
    }

    /// Advance every grid one simulation step, ignoring cadence and pause.
    pub fn step_once(&mut self) {
        let thresholds = self.config.thresholds;
        self.grids
            .par_iter_mut()
            .for_each(|grid| grid.tick(&thresholds));
        self.step += 1;
        trace!(
            "generation {} step {}: {} live",
            self.generation,
            self.step,
            self.grids.iter().map(PopulationGrid::score).sum::<usize>()
        );
    }

    /// Score, select, mutate and reseed: start the next generation now.
    pub fn advance_generation(&mut self) -> GenerationRecord {
        let scores = self.grid_scores();
        let ranking = rank(&scores);
        let champion = *self.grids[ranking[0]].weights();

        let mut slots = slot_list(&ranking, &self.config.selection_slots);
        self.rng.shuffle(&mut slots);

        let mut next: Vec<WeightVector> =
            slots.iter().map(|&i| *self.grids[i].weights()).collect();
        let mutations = self.rng.mutate(&mut next, &self.config.mutation);

        for (grid, weights) in self.grids.iter_mut().zip(next) {
            grid.set_weights(weights);
        }

        let record = GenerationRecord {
            generation: self.generation,
            scores,
            ranking,
            champion,
            slots,
            mutations,
        };
        info!(
            "generation {} scores {:?} champion grid {} weights {}",
            record.generation, record.scores, record.ranking[0], record.champion
        );

        self.reseed_grids();
        self.step = 0;
        self.frame = 0;
        self.generation += 1;

        self.history.push_back(record.clone());
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }

        record
    }

    /// Reseed every grid's centre third with a fresh random count.
    fn reseed_grids(&mut self) {
        for grid in &mut self.grids {
            let count = self
                .rng
                .width_multiple(self.config.width, self.config.reseed_multiplier);
            grid.reseed(count, self.rng.rng());
        }
    }

    /// Flip one cell. Out-of-range indices are ignored; returns whether a
    /// cell was flipped.
    pub fn toggle_cell(
        &mut self,
        grid_row: usize,
        grid_col: usize,
        col: usize,
        row: usize,
    ) -> bool {
        match grid_index(grid_row, grid_col) {
            Some(i) => self.grids[i].toggle(Coord::new(col, row)),
            None => false,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("{}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Empty every grid, pause, and restart the step count.
    ///
    /// Weights and the generation counter are kept.
    pub fn clear_all(&mut self) {
        for grid in &mut self.grids {
            grid.clear();
        }
        self.paused = true;
        self.frame = 0;
        self.step = 0;
        debug!("cleared all grids");
    }

    /// Scatter cells uniformly over every whole grid and restart the step
    /// count. Each grid draws `width * m` cells, `m` in
    /// `[min_multiplier, max_multiplier)`.
    pub fn reseed_all(&mut self, min_multiplier: usize, max_multiplier: usize) {
        for grid in &mut self.grids {
            let count = self
                .rng
                .width_multiple(self.config.width, (min_multiplier, max_multiplier));
            grid.reseed_with(&Pattern::Uniform { count }, self.rng.rng());
        }
        self.step = 0;
        debug!("scattered all grids: {:?}", self.grid_scores());
    }

    /// [`reseed_all`](Self::reseed_all) with the configured multipliers.
    pub fn scatter(&mut self) {
        let (lo, hi) = self.config.scatter_multiplier;
        self.reseed_all(lo, hi);
    }

    #[inline]
    pub fn current_step(&self) -> u32 {
        self.step
    }

    #[inline]
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Live-cell count per grid, row-major.
    pub fn grid_scores(&self) -> [usize; GRID_COUNT] {
        std::array::from_fn(|i| self.grids[i].score())
    }

    pub fn live_cells_of(&self, grid_row: usize, grid_col: usize) -> Option<&LiveCells> {
        self.grid(grid_row, grid_col).map(PopulationGrid::live_cells)
    }

    pub fn weights_of(&self, grid_row: usize, grid_col: usize) -> Option<&WeightVector> {
        self.grid(grid_row, grid_col).map(PopulationGrid::weights)
    }

    pub fn grid(&self, grid_row: usize, grid_col: usize) -> Option<&PopulationGrid> {
        grid_index(grid_row, grid_col).map(|i| &self.grids[i])
    }

    /// All grids, row-major.
    pub fn grids(&self) -> &[PopulationGrid; GRID_COUNT] {
        &self.grids
    }

    /// Completed generations, oldest first (bounded by `history_limit`).
    pub fn history(&self) -> impl Iterator<Item = &GenerationRecord> {
        self.history.iter()
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats::from_arena(self)
    }

    /// Window-caption style status, e.g. `Active at step 4 (g2)`.
    pub fn status_line(&self) -> String {
        let state = if self.paused { "Paused" } else { "Active" };
        format!("{state} at step {} (g{})", self.step, self.generation)
    }
}

/// Flat index for `(grid_row, grid_col)`.
fn grid_index(grid_row: usize, grid_col: usize) -> Option<usize> {
    (grid_row < ARENA_SIDE && grid_col < ARENA_SIDE).then(|| grid_row * ARENA_SIDE + grid_col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> EvolutionArena {
        EvolutionArena::new(ArenaConfig {
            width: 24,
            height: 24,
            random_seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let arena = seeded(1);
        assert_eq!(arena.current_step(), 0);
        assert_eq!(arena.current_generation(), 0);
        assert!(!arena.is_paused());
        for grid in arena.grids() {
            assert!(grid.weights().as_array().iter().all(|w| (-3..=4).contains(w)));
            assert!(grid.score() > 0);
            for c in grid.live_cells() {
                assert!((8..16).contains(&c.col) && (8..16).contains(&c.row));
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = EvolutionArena::new(ArenaConfig {
            frames_per_step: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidCadence)));
    }

    #[test]
    fn test_cadence() {
        let mut arena = seeded(2);
        for _ in 0..4 {
            assert!(!arena.tick().stepped);
        }
        assert!(arena.tick().stepped);
        assert_eq!(arena.current_step(), 1);
    }

    #[test]
    fn test_paused_does_not_step() {
        let mut arena = seeded(3);
        arena.set_paused(true);
        let before = arena.grid_scores();
        for _ in 0..50 {
            assert!(!arena.tick().stepped);
        }
        assert_eq!(arena.current_step(), 0);
        assert_eq!(arena.grid_scores(), before);
    }

    #[test]
    fn test_boundary_after_full_generation() {
        let mut arena = seeded(4);
        let frames = arena.config().frames_per_step * arena.config().steps_per_generation;
        for _ in 0..frames {
            assert!(arena.tick().boundary.is_none());
        }
        assert_eq!(arena.current_step(), 18);

        let outcome = arena.tick();
        let record = outcome.boundary.expect("boundary");
        assert_eq!(record.generation, 0);
        assert_eq!(record.slots.len(), 9);
        assert_eq!(arena.current_generation(), 1);
        assert_eq!(arena.current_step(), 0);
        assert!(!outcome.stepped);
        assert_eq!(arena.history().count(), 1);
    }

    #[test]
    fn test_boundary_preserves_pause() {
        let mut arena = seeded(5);
        for _ in 0..18 {
            arena.step_once();
        }
        arena.set_paused(true);
        let outcome = arena.tick();
        assert!(outcome.boundary.is_some());
        assert!(arena.is_paused());
    }

    #[test]
    fn test_selection_inherits_ranked_weights() {
        let mut arena = seeded(6);
        let before: Vec<WeightVector> = arena.grids().iter().map(|g| *g.weights()).collect();
        let record = arena.advance_generation();

        assert_eq!(record.champion, before[record.ranking[0]]);
        assert_eq!(record.slots.iter().filter(|&&g| g == record.ranking[0]).count(), 3);

        // Undo the recorded mutations; what remains is the shuffled copy.
        for (j, grid) in arena.grids().iter().enumerate() {
            let mut w = *grid.weights();
            for p in record.mutations.iter().filter(|p| p.grid == j) {
                w.nudge(p.slot, -p.delta);
            }
            assert_eq!(w, before[record.slots[j]]);
        }
    }

    #[test]
    fn test_extinct_generation_proceeds() {
        let mut arena = seeded(7);
        arena.clear_all();
        let record = arena.advance_generation();
        assert_eq!(record.scores, [0; 9]);
        assert_eq!(record.ranking, (0..9).collect::<Vec<_>>());
        assert!(arena.grid_scores().iter().all(|&s| s > 0));
    }

    #[test]
    fn test_toggle_cell() {
        let mut arena = seeded(8);
        arena.clear_all();
        assert!(arena.toggle_cell(1, 2, 3, 4));
        assert!(arena.live_cells_of(1, 2).unwrap().contains(&Coord::new(3, 4)));
        assert_eq!(arena.grid_scores()[5], 1);

        assert!(!arena.toggle_cell(3, 0, 0, 0));
        assert!(!arena.toggle_cell(0, 0, 24, 0));
        assert_eq!(arena.grid_scores().iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_clear_all() {
        let mut arena = seeded(9);
        arena.step_once();
        arena.advance_generation();
        let weights: Vec<WeightVector> = arena.grids().iter().map(|g| *g.weights()).collect();
        arena.step_once();

        arena.clear_all();
        assert_eq!(arena.grid_scores(), [0; 9]);
        assert_eq!(arena.current_step(), 0);
        assert_eq!(arena.current_generation(), 1);
        assert!(arena.is_paused());
        let after: Vec<WeightVector> = arena.grids().iter().map(|g| *g.weights()).collect();
        assert_eq!(after, weights);
    }

    #[test]
    fn test_reseed_all_whole_grid() {
        let mut arena = seeded(10);
        arena.step_once();
        arena.reseed_all(30, 40);
        assert_eq!(arena.current_step(), 0);
        // 720+ draws over 576 cells must land outside the centre third.
        let outside = arena.grids()[0]
            .live_cells()
            .iter()
            .any(|c| !(8..16).contains(&c.col) || !(8..16).contains(&c.row));
        assert!(outside);
    }

    #[test]
    fn test_toggle_paused_twice() {
        let mut arena = seeded(11);
        let scores = arena.grid_scores();
        arena.toggle_paused();
        assert!(arena.is_paused());
        arena.toggle_paused();
        assert!(!arena.is_paused());
        assert_eq!(arena.grid_scores(), scores);
    }

    #[test]
    fn test_status_line() {
        let mut arena = seeded(12);
        assert_eq!(arena.status_line(), "Active at step 0 (g0)");
        arena.step_once();
        arena.set_paused(true);
        assert_eq!(arena.status_line(), "Paused at step 1 (g0)");
    }

    #[test]
    fn test_history_limit() {
        let mut arena = EvolutionArena::new(ArenaConfig {
            width: 12,
            height: 12,
            history_limit: 2,
            random_seed: Some(13),
            ..Default::default()
        })
        .unwrap();
        for _ in 0..5 {
            arena.advance_generation();
        }
        let gens: Vec<u64> = arena.history().map(|r| r.generation).collect();
        assert_eq!(gens, vec![3, 4]);
    }

    #[test]
    fn test_stats() {
        let mut arena = seeded(14);
        arena.clear_all();
        arena.toggle_cell(2, 1, 0, 0);
        let stats = arena.stats();
        assert_eq!(stats.total_live, 1);
        assert_eq!(stats.best_grid, 7);
        assert!(stats.paused);
    }
}
