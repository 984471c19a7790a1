use crate::model::{Person, Project, Team};
use std::collections::BTreeSet;
use tracing::trace;

/// Every `k`-element subset of a pool, each produced once, with elements
/// kept in pool order.
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

pub fn combinations<T>(pool: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        pool,
        indices: (0..k).collect(),
        started: false,
        exhausted: k > pool.len(),
    }
}

impl<T> Combinations<'_, T> {
    fn advance(&mut self) {
        let (n, k) = (self.pool.len(), self.indices.len());
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            self.exhausted = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        if self.started {
            self.advance();
        }
        self.started = true;
        if self.exhausted {
            return None;
        }
        Some(self.indices.iter().map(|&i| self.pool[i].clone()).collect())
    }
}

/// All the teams `project` could be staffed with: one of `leads`, plus
/// between 1 and `max_members` people from `members` other than the lead.
pub fn enumerate_teams(
    project: &Project,
    leads: &BTreeSet<Person>,
    members: &BTreeSet<Person>,
    max_members: usize,
) -> Vec<Team> {
    let mut teams = Vec::new();
    for lead in leads {
        let eligible = members
            .iter()
            .filter(|&m| m != lead)
            .cloned()
            .collect::<Vec<_>>();
        // A lead without members is not a team.
        for size in 1..=max_members.min(eligible.len()) {
            teams.extend(
                combinations(&eligible, size).map(|people| Team::new(lead.clone(), people)),
            );
        }
    }
    trace!(
        project = %project,
        leads = leads.len(),
        members = members.len(),
        teams = teams.len(),
        "enumerated teams"
    );
    teams
}
