use crate::model::Problem;
use eyre::{Result, ensure};
use std::collections::HashSet;

/// Reject problems with duplicate names or interests referring to unknown
/// people or projects.
pub fn ensure_consistent(problem: &Problem) -> Result<()> {
    ensure!(!problem.projects.is_empty(), "no project has been declared");
    ensure!(!problem.members.is_empty(), "no team member has been declared");
    let mut projects = HashSet::new();
    for project in &problem.projects {
        ensure!(
            projects.insert(project),
            "project {project} is declared more than once"
        );
    }
    let mut members = HashSet::new();
    for member in &problem.members {
        ensure!(
            members.insert(member),
            "team member {member} is declared more than once"
        );
    }
    for (member, interest) in &problem.interests {
        ensure!(
            members.contains(member),
            "{member} declared interests but is not a team member"
        );
        for project in interest.lead.union(&interest.work) {
            ensure!(
                projects.contains(project),
                "{member} is interested in unknown project {project}"
            );
        }
    }
    Ok(())
}
