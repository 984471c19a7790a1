use crate::errors::SolverError;
use crate::model::Assignment;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw `k` distinct assignments uniformly at random.
pub fn sample<R>(
    feasible: &[Assignment],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Assignment>, SolverError>
where
    R: Rng + ?Sized,
{
    if feasible.len() < k {
        return Err(SolverError::InsufficientResults {
            found: feasible.len(),
            requested: k,
        });
    }
    Ok(feasible.choose_multiple(rng, k).cloned().collect())
}
