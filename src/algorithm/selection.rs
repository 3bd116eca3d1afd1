//! Random selection: `fix_at_random` and `fill_at_random`, the operations
//! an interactive shell drives the solver with.

use rand::seq::SliceRandom;

use crate::algorithm::propagation::SolverState;
use crate::rules::TileIndex;

impl SolverState {
    /// Pick a random member of the current option set at `(x, y)` and try
    /// `fix`; on failure try the next, in random order. If every option
    /// fails, write `error_tile` directly at `(x, y)`, bypassing
    /// propagation — neighboring cells are left untouched by this
    /// assignment. A cell that is already determined (fixed or errored) is
    /// left untouched.
    pub fn fix_at_random(&mut self, x: usize, y: usize) {
        if self.option_count(x, y) <= 1 {
            return;
        }
        let mut options = self.get(x, y);
        if options.is_empty() {
            return;
        }
        options.shuffle(&mut self.rng);

        for choice in options {
            if self.fix(x, y, choice) {
                return;
            }
        }

        log::debug!("fix_at_random({x},{y}): all options exhausted, marking error_tile");
        self.set_error_cell(x, y);
    }

    /// Drive the grid toward full determination: repeatedly find the
    /// undetermined cell(s) with the smallest option set (> 1), break ties
    /// by a uniform random shuffle, and call `fix_at_random` on each.
    /// Terminates when every cell has an option set of size 1 — a cell
    /// that became `{error_tile}` counts as determined for this purpose,
    /// even though it is not a real solution.
    pub fn fill_at_random(&mut self) {
        loop {
            let Some(candidates) = self.smallest_undetermined_cells() else {
                break;
            };
            for (x, y) in candidates {
                self.fix_at_random(x, y);
            }
        }
    }

    fn smallest_undetermined_cells(&mut self) -> Option<Vec<(usize, usize)>> {
        let (width, height) = self.dimensions();
        let mut min_count = usize::MAX;
        let mut candidates: Vec<(usize, usize)> = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let count = self.option_count(x, y);
                if count <= 1 {
                    continue;
                }
                match count.cmp(&min_count) {
                    std::cmp::Ordering::Less => {
                        min_count = count;
                        candidates.clear();
                        candidates.push((x, y));
                    }
                    std::cmp::Ordering::Equal => candidates.push((x, y)),
                    std::cmp::Ordering::Greater => {}
                }
            }
        }

        if candidates.is_empty() {
            None
        } else {
            candidates.shuffle(&mut self.rng);
            Some(candidates)
        }
    }
}

/// Whether every option-set member is the same distinguished index, used by
/// tests and diagnostics to recognize a fully-errored cell without
/// reconstructing a bitset.
#[must_use]
pub fn is_singleton_of(options: &[TileIndex], value: TileIndex) -> bool {
    options.len() == 1 && options[0] == value
}

