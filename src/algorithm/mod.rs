/// Fixed-size bitset for tile option sets
pub mod bitset;
/// `SolverState` and the transactional propagation engine
pub mod propagation;
/// Random tile and cell selection driving `fix_at_random`/`fill_at_random`
pub mod selection;

pub use propagation::SolverState;
