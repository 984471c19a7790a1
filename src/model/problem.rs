use super::{Person, Project};
use crate::errors::SolverError;
use eyre::eyre;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// The way a person wants to be involved in a project.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lead,
    #[default]
    Work,
}

impl FromStr for Role {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Role, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lead" => Ok(Role::Lead),
            "work" => Ok(Role::Work),
            other => Err(eyre!("unknown role {other:?} (expected \"lead\" or \"work\")")),
        }
    }
}

/// Projects a person declared interest in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Interest {
    pub lead: BTreeSet<Project>,
    pub work: BTreeSet<Project>,
}

/// Everything collected from the user before solving.
#[derive(Clone, Debug, Default)]
pub struct Problem {
    pub projects: Vec<Project>,
    pub members: Vec<Person>,
    pub interests: BTreeMap<Person, Interest>,
}

impl Problem {
    pub fn new() -> Problem {
        Problem::default()
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Add `project` unless it is already known.
    pub fn declare_project(&mut self, project: Project) {
        if !self.projects.contains(&project) {
            self.projects.push(project);
        }
    }

    pub fn add_member(&mut self, member: Person) {
        self.members.push(member);
    }

    /// Add `member` unless it is already known.
    pub fn declare_member(&mut self, member: Person) {
        if !self.members.contains(&member) {
            self.members.push(member);
        }
    }

    pub fn add_interest(&mut self, member: Person, project: Project, role: Role) {
        let interest = self.interests.entry(member).or_default();
        match role {
            Role::Lead => interest.lead.insert(project),
            Role::Work => interest.work.insert(project),
        };
    }

    /// Projects every person volunteered to lead.
    pub fn lead_interest(&self) -> BTreeMap<Person, BTreeSet<Project>> {
        self.interests
            .iter()
            .map(|(person, interest)| (person.clone(), interest.lead.clone()))
            .collect()
    }

    /// Projects every person may be a member of. Projects someone wants to
    /// lead are included so they can still join them as a regular member.
    pub fn work_interest(&self) -> BTreeMap<Person, BTreeSet<Project>> {
        self.interests
            .iter()
            .map(|(person, interest)| {
                (
                    person.clone(),
                    interest.lead.union(&interest.work).cloned().collect(),
                )
            })
            .collect()
    }
}

/// Validated caps. Both are at least 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Limits {
    max_members_per_project: usize,
    max_projects_per_person: usize,
}

impl Limits {
    pub fn new(
        max_members_per_project: usize,
        max_projects_per_person: usize,
    ) -> Result<Limits, SolverError> {
        if max_members_per_project == 0 {
            return Err(SolverError::InvalidConfiguration {
                parameter: "max_members_per_project",
                value: max_members_per_project,
            });
        }
        if max_projects_per_person == 0 {
            return Err(SolverError::InvalidConfiguration {
                parameter: "max_projects_per_person",
                value: max_projects_per_person,
            });
        }
        Ok(Limits {
            max_members_per_project,
            max_projects_per_person,
        })
    }

    /// Maximum number of non-lead members on a project.
    pub fn max_members_per_project(&self) -> usize {
        self.max_members_per_project
    }

    pub fn max_projects_per_person(&self) -> usize {
        self.max_projects_per_person
    }
}
