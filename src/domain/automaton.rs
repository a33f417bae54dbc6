//! The automaton: one toroidal grid evolving under one fixed rule.

use super::algorithm::StepStrategy;
use super::grid::{Coordinate, Grid, wrap};
use super::patterns;
use super::rules::Rule;
use crate::error::{LifeError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// A grid plus the rule that advances it.
///
/// Stepping is synchronous: every cell of generation `n + 1` is computed from
/// generation `n` alone. Two buffers are kept and swapped after each step, so
/// the grid being read is never the grid being written.
#[derive(Clone, Debug)]
pub struct Automaton {
    grid: Grid,
    /// Next-generation buffer, contents meaningless between steps.
    back: Grid,
    rule: Rule,
    strategy: StepStrategy,
    generation: u64,
}

impl Automaton {
    /// Create an all-dead automaton from raw rule tables.
    ///
    /// Fails with [`LifeError::InvalidDimension`] or [`LifeError::InvalidRuleTable`].
    pub fn new(width: usize, height: usize, born: &[bool], survives: &[bool]) -> Result<Self> {
        let rule = Rule::try_new(born, survives)?;
        Self::with_rule(width, height, rule)
    }

    /// Create an all-dead automaton from an already validated rule.
    pub fn with_rule(width: usize, height: usize, rule: Rule) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        log::debug!("automaton {}x{} rule {}", width, height, rule);
        Ok(Self {
            back: grid.clone(),
            grid,
            rule,
            strategy: StepStrategy::default(),
            generation: 0,
        })
    }

    /// Builder-style strategy selection
    pub fn with_strategy(mut self, strategy: StepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_strategy(&mut self, strategy: StepStrategy) {
        self.strategy = strategy;
    }

    pub const fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Steps taken since construction or the last reset.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell state at (x, y); coordinates wrap.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.grid.get(x, y)
    }

    /// Overwrite a single cell; coordinates wrap.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        self.grid.set(x, y, alive);
    }

    pub fn live_cell_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> Vec<Coordinate> {
        self.grid
            .iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| Coordinate::new(x as i64, y as i64))
            .collect()
    }

    /// Stamp a catalog pattern with its origin at `anchor`.
    ///
    /// Additive: cells outside the pattern are left as they are. An unknown
    /// name fails with [`LifeError::UnknownPattern`] before any cell is written.
    pub fn seed_pattern(&mut self, name: &str, anchor: impl Into<Coordinate>) -> Result<()> {
        let anchor = anchor.into();
        let pattern = patterns::lookup(name).inspect_err(|_| {
            log::warn!("cannot seed unknown pattern {:?}", name);
        })?;
        log::debug!(
            "seeding {} ({} cells) at ({}, {})",
            pattern.name,
            pattern.len(),
            anchor.x,
            anchor.y
        );
        self.stamp(pattern.offsets(), anchor);
        Ok(())
    }

    /// Stamp an arbitrary list of live-cell offsets with its origin at `anchor`.
    pub fn seed_cells(&mut self, offsets: &[Coordinate], anchor: impl Into<Coordinate>) {
        let anchor = anchor.into();
        log::debug!(
            "seeding {} custom cells at ({}, {})",
            offsets.len(),
            anchor.x,
            anchor.y
        );
        self.stamp(offsets.iter().copied(), anchor);
    }

    fn stamp(&mut self, offsets: impl Iterator<Item = Coordinate>, anchor: Coordinate) {
        let (width, height) = self.grid.dimensions();
        let (ax, ay) = self.grid.normalize(anchor.x, anchor.y);
        for offset in offsets {
            let x = wrap(offset.x, width) + ax;
            let y = wrap(offset.y, height) + ay;
            self.grid.set_at(x % width, y % height, true);
        }
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Refill the grid at random, each cell alive with probability `density`.
    ///
    /// The same `seed` always yields the same board. Resets the generation
    /// counter. Fails with [`LifeError::InvalidDensity`] outside `[0, 1]`.
    pub fn randomize(&mut self, density: f64, seed: u64) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            log::warn!("rejecting fill density {}", density);
            return Err(LifeError::InvalidDensity(density));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let (width, height) = self.grid.dimensions();
        for y in 0..height {
            for x in 0..width {
                self.grid.set_at(x, y, rng.random_bool(density));
            }
        }
        self.generation = 0;
        log::debug!(
            "randomized {}x{} at density {} ({} live)",
            width,
            height,
            density,
            self.live_cell_count()
        );
        Ok(())
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        self.back.clear();
        match self.strategy {
            StepStrategy::Serial => evolve(&self.grid, &mut self.back, &self.rule),
            StepStrategy::Parallel => evolve_parallel(&self.grid, &mut self.back, &self.rule),
        }
        std::mem::swap(&mut self.grid, &mut self.back);
        self.generation += 1;
        log::trace!("generation {}: {} live", self.generation, self.live_cell_count());
    }

    /// Advance `n` generations; `n == 0` leaves everything untouched.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
        log::debug!("stepped {} generations, now at {}", n, self.generation);
    }
}

/// Write the successor of `current` into the all-dead `next`.
fn evolve(current: &Grid, next: &mut Grid, rule: &Rule) {
    let (width, height) = current.dimensions();
    for y in 0..height {
        for x in 0..width {
            let neighbors = current.count_neighbors_at(x, y);
            if rule.next_state(current.get_at(x, y), neighbors) {
                next.set_at(x, y, true);
            }
        }
    }
}

/// Same as [`evolve`], one rayon task per row.
fn evolve_parallel(current: &Grid, next: &mut Grid, rule: &Rule) {
    let width = current.width();
    let (chunk_width, rows) = next.rows_mut();

    rows.par_chunks_mut(chunk_width)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let neighbors = current.count_neighbors_at(x, y);
                if rule.next_state(current.get_at(x, y), neighbors) {
                    row[x / 64].set((x % 64) as u8, true);
                }
            }
        });
}
