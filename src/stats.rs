use crate::model::{Assignment, Person};

/// How a person is used across a set of assignments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Workload {
    pub person: Person,
    /// Number of projects led, summed over all assignments.
    pub led: usize,
    pub min_roles: usize,
    pub max_roles: usize,
}

pub fn statistics(assignments: &[Assignment], members: &[Person]) -> Vec<Workload> {
    members
        .iter()
        .map(|person| {
            let roles = assignments
                .iter()
                .map(|a| a.workload_of(person))
                .collect::<Vec<_>>();
            Workload {
                person: person.clone(),
                led: assignments.iter().map(|a| a.led_by(person)).sum(),
                min_roles: roles.iter().copied().min().unwrap_or(0),
                max_roles: roles.iter().copied().max().unwrap_or(0),
            }
        })
        .collect()
}
