use crate::model::{Assignment, Person};

/// Check that every person of `team_members` holds at least one and at
/// most `max_projects_per_person` roles in `assignment`.
pub fn is_valid(
    assignment: &Assignment,
    team_members: &[Person],
    max_projects_per_person: usize,
) -> bool {
    let workload = assignment.workload();
    team_members.iter().all(|person| {
        let projects = workload.get(person).copied().unwrap_or(0);
        (1..=max_projects_per_person).contains(&projects)
    })
}

/// Keep the valid assignments, in encounter order. Nothing is buffered, so
/// this can be fed straight from `compose`.
pub fn filter_feasible<'r, I>(
    assignments: I,
    team_members: &'r [Person],
    max_projects_per_person: usize,
) -> impl Iterator<Item = Assignment> + use<'r, I>
where
    I: IntoIterator<Item = Assignment>,
{
    assignments
        .into_iter()
        .filter(move |a| is_valid(a, team_members, max_projects_per_person))
}
