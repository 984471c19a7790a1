use crate::model::{Assignment, Project, TeamList};
use std::iter::FusedIterator;
use std::rc::Rc;

/// Lazily walks the Cartesian product of the per-project team lists. The
/// last project changes fastest.
pub struct Compose<'a> {
    teams_by_project: &'a [(Project, TeamList)],
    indices: Vec<usize>,
    exhausted: bool,
}

pub fn compose(teams_by_project: &[(Project, TeamList)]) -> Compose<'_> {
    Compose {
        teams_by_project,
        indices: vec![0; teams_by_project.len()],
        exhausted: teams_by_project.iter().any(|(_, teams)| teams.is_empty()),
    }
}

/// Number of assignments `compose` will produce.
pub fn candidate_count(teams_by_project: &[(Project, TeamList)]) -> u128 {
    teams_by_project
        .iter()
        .fold(1u128, |n, (_, teams)| n.saturating_mul(teams.len() as u128))
}

impl Compose<'_> {
    fn advance(&mut self) {
        for (index, (_, teams)) in self
            .indices
            .iter_mut()
            .zip(self.teams_by_project)
            .rev()
        {
            *index += 1;
            if *index < teams.len() {
                return;
            }
            *index = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Compose<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.exhausted {
            return None;
        }
        let assignment = Assignment::new(
            self.teams_by_project
                .iter()
                .zip(&self.indices)
                .map(|((project, teams), &i)| (project.clone(), Rc::clone(&teams[i])))
                .collect(),
        );
        self.advance();
        Some(assignment)
    }
}

impl FusedIterator for Compose<'_> {}
