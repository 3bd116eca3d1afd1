//! `SolverState`: the mutable grid of per-cell option sets and the
//! transactional propagation engine that drives it. The heart of the system.

use std::rc::Rc;

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::bitset::TileBitset;
use crate::rules::{Direction, Rules, TileIndex, is_wildcard_set};

/// Mutable grid of per-cell option sets, reduced by adjacency-rule
/// propagation as cells are fixed.
pub struct SolverState {
    width: usize,
    height: usize,
    rule_set: Rc<Rules>,
    tile_capacity: usize,
    options_at: Array2<TileBitset>,
    initial: Array2<TileBitset>,
    dirty: bool,
    pub(crate) rng: StdRng,
    /// Cursor position last reported by the external UI shell. Not used by
    /// any core operation; a convenience slot for callers to round-trip
    /// interaction state alongside the solver.
    pub selection_cursor: Option<(usize, usize)>,
    /// Last click coordinates reported by the external UI shell. Same
    /// caveat as `selection_cursor`.
    pub last_click: Option<(usize, usize)>,
}

impl SolverState {
    /// Construct a solver over `rule_set` with the given grid dimensions.
    /// Every cell starts fully undetermined (`rule_set.all_indexes()`).
    /// Randomness used by `fix_at_random`/`fill_at_random` is seeded so
    /// that repeated runs with the same seed and call sequence produce
    /// identical results.
    #[must_use]
    pub fn new(rule_set: Rc<Rules>, width: usize, height: usize, seed: u64) -> Self {
        let tile_capacity = rule_set.all_indexes().iter().copied().max().unwrap_or(0) as usize;
        let full = TileBitset::from_hashset(
            &rule_set
                .all_indexes()
                .iter()
                .map(|&index| index as usize)
                .collect(),
            tile_capacity,
        );
        let options_at = Array2::from_elem((height, width), full);

        Self {
            width,
            height,
            rule_set,
            tile_capacity,
            initial: options_at.clone(),
            options_at,
            dirty: true,
            rng: StdRng::seed_from_u64(seed),
            selection_cursor: None,
            last_click: None,
        }
    }

    /// Grid width in cells
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The rule set this solver was constructed over.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rule_set
    }

    /// Whether the option map has changed since the last `clear_dirty`.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge the current state as observed; clears the dirty flag.
    pub const fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Restore every cell to `all_indexes`, bit-for-bit identical to the
    /// state at construction.
    pub fn reset(&mut self) {
        self.options_at.clone_from(&self.initial);
        self.dirty = true;
    }

    /// Current option set at `(x, y)` as 1-based tile indices. Empty if out
    /// of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Vec<TileIndex> {
        self.options_at.get((y, x)).map_or_else(Vec::new, |bitset| {
            bitset
                .to_vec()
                .into_iter()
                .map(|v| v as TileIndex)
                .collect()
        })
    }

    pub(crate) fn option_count(&self, x: usize, y: usize) -> usize {
        self.options_at.get((y, x)).map_or(0, TileBitset::count)
    }

    pub(crate) const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub(crate) const fn tile_capacity(&self) -> usize {
        self.tile_capacity
    }

    pub(crate) fn error_tile(&self) -> TileIndex {
        self.rule_set.error_tile
    }

    pub(crate) fn set_error_cell(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.options_at.get_mut((y, x)) {
            *cell = TileBitset::singleton(self.rule_set.error_tile as usize, self.tile_capacity);
            self.dirty = true;
        }
    }

    /// For every cell whose sole option is `error_tile`, restore it to
    /// `all_indexes`.
    pub fn clear_errors(&mut self) {
        let error_tile = self.rule_set.error_tile as usize;
        let full = TileBitset::from_hashset(
            &self
                .rule_set
                .all_indexes()
                .iter()
                .map(|&index| index as usize)
                .collect(),
            self.tile_capacity,
        );
        let mut changed = false;
        for cell in &mut self.options_at {
            if cell.single() == Some(error_tile) {
                *cell = full.clone();
                changed = true;
            }
        }
        if changed {
            self.dirty = true;
        }
    }

    /// Transactional attempt to assign `choice` at `(x, y)` and propagate
    /// the consequences to neighbors. Returns `true` and leaves the state
    /// updated on success; returns `false` and leaves `options_at` bit-for-
    /// bit identical to its pre-call value on failure.
    pub fn fix(&mut self, x: usize, y: usize, choice: TileIndex) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let snapshot = self.options_at.clone();
        if self.propagate_fix(x, y, choice) {
            self.dirty = true;
            true
        } else {
            self.options_at = snapshot;
            self.dirty = false;
            false
        }
    }

    /// The recursive core of `fix`: sets the cell, looks up its rules, and
    /// reduces each neighbor's option set in canonical direction order
    /// (Up, Down, Left, Right). When a neighbor is reduced to a single
    /// option, recurses into it immediately and returns that result
    /// without visiting the remaining directions from this call — the
    /// recursive call re-establishes consistency around the newly fixed
    /// neighbor. This early-exit matches the source behavior; continuing
    /// the direction loop after the recursive call returns is also
    /// correct and propagates more eagerly, but is not what this
    /// implementation does.
    fn propagate_fix(&mut self, x: usize, y: usize, choice: TileIndex) -> bool {
        let Some(cell) = self.options_at.get_mut((y, x)) else {
            return false;
        };
        *cell = TileBitset::singleton(choice as usize, self.tile_capacity);

        let Ok(rule_map) = self.rule_set.get_rule_by_index(choice) else {
            log::debug!("fix({x},{y},{choice}): unknown tile during propagation");
            return false;
        };
        let expanded = rule_map.expand();

        for direction in Direction::ALL {
            let Some(allowed) = expanded.get(&direction) else {
                continue;
            };
            if is_wildcard_set(allowed) {
                log::debug!("fix({x},{y},{choice}): wildcard direction {direction:?}, skipping");
                continue;
            }
            let Some((nx, ny)) = neighbor(x, y, self.width, self.height, direction) else {
                continue;
            };
            let Some(other) = self.options_at.get((ny, nx)).cloned() else {
                continue;
            };

            let candidate = TileBitset::from_hashset(
                &allowed.iter().map(|&index| index as usize).collect(),
                self.tile_capacity,
            );
            let intersected = candidate.intersection(&other);

            if intersected.is_empty() {
                log::debug!("fix({x},{y},{choice}): no valid options left at ({nx},{ny})");
                return false;
            }
            if intersected == other {
                continue;
            }

            if let Some(single) = intersected.single() {
                if let Some(neighbor_cell) = self.options_at.get_mut((ny, nx)) {
                    *neighbor_cell = intersected;
                }
                log::debug!("fix({x},{y},{choice}): fixed-here at ({nx},{ny}) = {single}");
                return self.propagate_fix(nx, ny, single as TileIndex);
            }

            if let Some(neighbor_cell) = self.options_at.get_mut((ny, nx)) {
                *neighbor_cell = intersected;
            }
        }

        true
    }
}

fn neighbor(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    direction: Direction,
) -> Option<(usize, usize)> {
    let (dx, dy) = direction.offset();
    let nx = x as i32 + dx;
    let ny = y as i32 + dy;
    if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
        None
    } else {
        Some((nx as usize, ny as usize))
    }
}

