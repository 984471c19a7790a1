pub use self::compose::{Compose, candidate_count, compose};
pub use self::feasibility::{filter_feasible, is_valid};
pub use self::index::{InterestIndex, invert};
pub use self::sampler::sample;
pub use self::solver::{CacheStats, Outcome, ProjectDiagnostic, Solver};
pub use self::teams::{Combinations, combinations, enumerate_teams};

mod compose;
mod feasibility;
mod index;
mod sampler;
mod solver;
mod teams;
