use super::{Person, Project, Team};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Shared list of the teams a project could be staffed with.
pub type TeamList = Rc<Vec<Rc<Team>>>;

/// A full staffing solution: exactly one team per project, in project
/// declaration order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Assignment {
    teams: Vec<(Project, Rc<Team>)>,
}

impl Assignment {
    pub fn new(teams: Vec<(Project, Rc<Team>)>) -> Assignment {
        Assignment { teams }
    }

    pub fn team_for(&self, project: &Project) -> Option<&Team> {
        self.teams
            .iter()
            .find(|(p, _)| p == project)
            .map(|(_, team)| team.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Project, &Team)> {
        self.teams.iter().map(|(p, team)| (p, team.as_ref()))
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.teams.iter().map(|(p, _)| p)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Number of roles (lead or member) every person holds across all
    /// projects. People holding no role are absent.
    pub fn workload(&self) -> HashMap<&Person, usize> {
        let mut counts = HashMap::new();
        for person in self.teams.iter().flat_map(|(_, team)| team.people()) {
            *counts.entry(person).or_insert(0) += 1;
        }
        counts
    }

    pub fn workload_of(&self, person: &Person) -> usize {
        self.teams
            .iter()
            .filter(|(_, team)| team.involves(person))
            .count()
    }

    /// Number of projects led by `person`.
    pub fn led_by(&self, person: &Person) -> usize {
        self.teams
            .iter()
            .filter(|(_, team)| team.is_lead(person))
            .count()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (project, team) in self.iter() {
            writeln!(f, "  - {project}: {team}")?;
        }
        Ok(())
    }
}
