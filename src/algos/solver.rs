use super::compose::{candidate_count, compose};
use super::feasibility::filter_feasible;
use super::index::InterestIndex;
use super::teams::enumerate_teams;
use crate::errors::SolverError;
use crate::model::{Assignment, Limits, Person, Problem, Project, TeamList};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use tracing::{debug, info, instrument, trace, warn};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct TeamKey {
    leads: Vec<Person>,
    members: Vec<Person>,
    max_members: usize,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct FeasibleKey {
    teams: Vec<(Project, TeamKey)>,
    roster: Vec<Person>,
    max_projects: usize,
}

/// Candidate pools of a project, kept to explain an empty result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectDiagnostic {
    pub project: Project,
    pub lead_candidates: usize,
    pub member_candidates: usize,
    pub teams: usize,
}

impl ProjectDiagnostic {
    pub fn is_unled(&self) -> bool {
        self.lead_candidates == 0
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub diagnostics: Vec<ProjectDiagnostic>,
    /// Roster members who did not declare any interest.
    pub idle_members: Vec<Person>,
    /// Size of the searched space.
    pub candidates: u128,
    pub feasible: Rc<Vec<Assignment>>,
}

impl Outcome {
    pub fn unled_projects(&self) -> impl Iterator<Item = &Project> {
        self.diagnostics
            .iter()
            .filter(|d| d.is_unled())
            .map(|d| &d.project)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Runs the search and memoizes team lists and feasible sets. Entries are
/// keyed by their full sorted inputs, so a stale entry is never returned;
/// `invalidate` releases the memory once the inputs changed.
pub struct Solver {
    limits: Limits,
    max_candidates: Option<u64>,
    teams: HashMap<TeamKey, TeamList>,
    feasible: HashMap<FeasibleKey, Rc<Vec<Assignment>>>,
    team_stats: CacheStats,
    feasible_stats: CacheStats,
}

impl Solver {
    pub fn new(limits: Limits) -> Solver {
        Solver {
            limits,
            max_candidates: None,
            teams: HashMap::new(),
            feasible: HashMap::new(),
            team_stats: CacheStats::default(),
            feasible_stats: CacheStats::default(),
        }
    }

    /// Refuse to search when more than `limit` candidate assignments would
    /// have to be checked.
    pub fn with_max_candidates(mut self, limit: Option<u64>) -> Solver {
        self.max_candidates = limit;
        self
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    pub fn invalidate(&mut self) {
        debug!(
            teams = self.teams.len(),
            feasible = self.feasible.len(),
            "dropping cached results"
        );
        self.teams.clear();
        self.feasible.clear();
    }

    pub fn team_cache_stats(&self) -> CacheStats {
        self.team_stats
    }

    pub fn feasible_cache_stats(&self) -> CacheStats {
        self.feasible_stats
    }

    fn teams_for(
        &mut self,
        project: &Project,
        leads: &BTreeSet<Person>,
        members: &BTreeSet<Person>,
    ) -> (TeamKey, TeamList) {
        let key = TeamKey {
            leads: leads.iter().cloned().collect(),
            members: members.iter().cloned().collect(),
            max_members: self.limits.max_members_per_project(),
        };
        if let Some(teams) = self.teams.get(&key) {
            self.team_stats.hits += 1;
            trace!(project = %project, "reusing cached teams");
            return (key, Rc::clone(teams));
        }
        self.team_stats.misses += 1;
        let teams: TeamList = Rc::new(
            enumerate_teams(project, leads, members, key.max_members)
                .into_iter()
                .map(Rc::new)
                .collect(),
        );
        self.teams.insert(key.clone(), Rc::clone(&teams));
        (key, teams)
    }

    /// Find every feasible assignment of `problem`.
    #[instrument(skip_all, fields(projects = problem.projects.len(), members = problem.members.len()))]
    pub fn solve(&mut self, problem: &Problem) -> Result<Outcome, SolverError> {
        let work_interest = problem.work_interest();
        let leads = InterestIndex::new(&problem.lead_interest());
        let people = InterestIndex::new(&work_interest);

        let mut diagnostics = Vec::with_capacity(problem.projects.len());
        let mut keys = Vec::with_capacity(problem.projects.len());
        let mut teams_by_project = Vec::with_capacity(problem.projects.len());
        for project in &problem.projects {
            let candidate_leads = leads.people_for(project);
            let candidate_members = people.people_for(project);
            let (key, teams) = self.teams_for(project, candidate_leads, candidate_members);
            if candidate_leads.is_empty() {
                warn!(project = %project, "nobody volunteered to lead this project");
            }
            debug!(
                project = %project,
                leads = candidate_leads.len(),
                members = candidate_members.len(),
                teams = teams.len(),
                "possible teams"
            );
            diagnostics.push(ProjectDiagnostic {
                project: project.clone(),
                lead_candidates: candidate_leads.len(),
                member_candidates: candidate_members.len(),
                teams: teams.len(),
            });
            keys.push((project.clone(), key));
            teams_by_project.push((project.clone(), teams));
        }

        let idle_members = problem
            .members
            .iter()
            .filter(|m| work_interest.get(*m).is_none_or(BTreeSet::is_empty))
            .cloned()
            .collect::<Vec<_>>();
        for member in &idle_members {
            warn!(member = %member, "member is not interested in any project");
        }

        let candidates = candidate_count(&teams_by_project);
        if let Some(limit) = self.max_candidates {
            if candidates > u128::from(limit) {
                return Err(SolverError::SearchSpaceTooLarge { candidates, limit });
            }
        }

        let mut roster = problem.members.clone();
        roster.sort();
        let key = FeasibleKey {
            teams: keys,
            roster,
            max_projects: self.limits.max_projects_per_person(),
        };
        let feasible = if let Some(feasible) = self.feasible.get(&key) {
            self.feasible_stats.hits += 1;
            trace!("reusing cached feasible assignments");
            Rc::clone(feasible)
        } else {
            self.feasible_stats.misses += 1;
            let feasible = Rc::new(
                filter_feasible(
                    compose(&teams_by_project),
                    &problem.members,
                    key.max_projects,
                )
                .collect::<Vec<_>>(),
            );
            self.feasible.insert(key, Rc::clone(&feasible));
            feasible
        };
        info!(
            candidates = %candidates,
            feasible = feasible.len(),
            "search complete"
        );

        Ok(Outcome {
            diagnostics,
            idle_members,
            candidates,
            feasible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::feasibility::is_valid;
    use crate::algos::sampler::sample;
    use crate::model::{Role, Team};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn problem(
        projects: &[&str],
        members: &[&str],
        interests: &[(&str, &str, Role)],
    ) -> Problem {
        let mut problem = Problem::new();
        for &p in projects {
            problem.add_project(p.into());
        }
        for &m in members {
            problem.add_member(m.into());
        }
        for &(member, project, role) in interests {
            problem.add_interest(member.into(), project.into(), role);
        }
        problem
    }

    fn solver(max_members: usize, max_projects: usize) -> Solver {
        Solver::new(Limits::new(max_members, max_projects).unwrap())
    }

    #[test]
    fn test_leads_without_members_yield_nothing() {
        let p = problem(
            &["A", "B"],
            &["X", "Y"],
            &[
                ("X", "A", Role::Lead),
                ("X", "A", Role::Work),
                ("Y", "B", Role::Lead),
                ("Y", "B", Role::Work),
            ],
        );
        let outcome = solver(1, 1).solve(&p).unwrap();
        assert!(outcome.diagnostics.iter().all(|d| d.teams == 0));
        assert_eq!(outcome.unled_projects().count(), 0);
        assert_eq!(outcome.candidates, 0);
        assert!(outcome.feasible.is_empty());
    }

    #[test]
    fn test_cross_interest_yields_single_assignment() {
        // X and Y both want to work on both projects, each leads one.
        let p = problem(
            &["A", "B"],
            &["X", "Y"],
            &[
                ("X", "A", Role::Lead),
                ("X", "B", Role::Work),
                ("Y", "B", Role::Lead),
                ("Y", "A", Role::Work),
            ],
        );
        let outcome = solver(1, 2).solve(&p).unwrap();
        assert_eq!(outcome.candidates, 1);
        assert_eq!(outcome.feasible.len(), 1);
        let a = &outcome.feasible[0];
        assert_eq!(
            a.team_for(&"A".into()),
            Some(&Team::new("X".into(), vec!["Y".into()]))
        );
        assert_eq!(
            a.team_for(&"B".into()),
            Some(&Team::new("Y".into(), vec!["X".into()]))
        );
        // Everyone holds two roles, which a cap of one forbids.
        assert!(solver(1, 1).solve(&p).unwrap().feasible.is_empty());
    }

    #[test]
    fn test_unled_project_reported() {
        let p = problem(&["A"], &["X", "Y"], &[("X", "A", Role::Work), ("Y", "A", Role::Work)]);
        let outcome = solver(2, 1).solve(&p).unwrap();
        assert_eq!(
            outcome.unled_projects().map(Project::name).collect::<Vec<_>>(),
            vec!["A"]
        );
        assert_eq!(outcome.diagnostics[0].member_candidates, 2);
        assert!(outcome.feasible.is_empty());
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample(&outcome.feasible, 10, &mut rng),
            Err(SolverError::InsufficientResults { found: 0, requested: 10 })
        ));
    }

    #[test]
    fn test_lead_only_interest_counts_as_membership() {
        // Y only volunteered to lead A but can still join X's team.
        let p = problem(
            &["A"],
            &["X", "Y"],
            &[("X", "A", Role::Lead), ("Y", "A", Role::Lead)],
        );
        let outcome = solver(1, 1).solve(&p).unwrap();
        assert_eq!(outcome.feasible.len(), 2);
        assert_eq!(outcome.diagnostics[0].member_candidates, 2);
    }

    #[test]
    fn test_idle_members_reported() {
        let p = problem(
            &["A"],
            &["X", "Y", "Z"],
            &[("X", "A", Role::Lead), ("Y", "A", Role::Work)],
        );
        let outcome = solver(2, 1).solve(&p).unwrap();
        assert_eq!(outcome.idle_members, vec![Person::from("Z")]);
        assert!(outcome.feasible.is_empty());
    }

    #[test]
    fn test_every_result_is_feasible() {
        let p = problem(
            &["A", "B", "C"],
            &["V", "W", "X", "Y", "Z"],
            &[
                ("V", "A", Role::Lead),
                ("W", "B", Role::Lead),
                ("X", "C", Role::Lead),
                ("V", "B", Role::Work),
                ("W", "C", Role::Work),
                ("X", "A", Role::Work),
                ("Y", "A", Role::Work),
                ("Y", "B", Role::Work),
                ("Z", "B", Role::Work),
                ("Z", "C", Role::Work),
            ],
        );
        let mut solver = solver(2, 2);
        let outcome = solver.solve(&p).unwrap();
        assert!(!outcome.feasible.is_empty());
        assert!(outcome.feasible.len() as u128 <= outcome.candidates);
        for a in outcome.feasible.iter() {
            assert!(is_valid(a, &p.members, 2));
            assert_eq!(a.len(), 3);
        }
    }

    #[test]
    fn test_results_are_memoized() {
        let p = problem(
            &["A", "B"],
            &["X", "Y"],
            &[
                ("X", "A", Role::Lead),
                ("X", "B", Role::Work),
                ("Y", "B", Role::Lead),
                ("Y", "A", Role::Work),
            ],
        );
        let mut solver = solver(1, 2);
        let first = solver.solve(&p).unwrap();
        assert_eq!(solver.team_cache_stats(), CacheStats { hits: 0, misses: 2 });
        assert_eq!(solver.feasible_cache_stats(), CacheStats { hits: 0, misses: 1 });
        let second = solver.solve(&p).unwrap();
        assert!(Rc::ptr_eq(&first.feasible, &second.feasible));
        assert_eq!(solver.team_cache_stats(), CacheStats { hits: 2, misses: 2 });
        assert_eq!(solver.feasible_cache_stats(), CacheStats { hits: 1, misses: 1 });

        // Changing a cap changes the keys.
        solver.set_limits(Limits::new(1, 1).unwrap());
        assert!(solver.solve(&p).unwrap().feasible.is_empty());
        assert_eq!(solver.team_cache_stats().hits, 4);
        assert_eq!(solver.feasible_cache_stats().misses, 2);

        solver.invalidate();
        solver.set_limits(Limits::new(1, 2).unwrap());
        let third = solver.solve(&p).unwrap();
        assert!(!Rc::ptr_eq(&first.feasible, &third.feasible));
        assert_eq!(first.feasible, third.feasible);
        assert_eq!(solver.team_cache_stats().misses, 4);
    }

    #[test]
    fn test_search_space_limit() {
        let p = problem(
            &["A", "B"],
            &["X", "Y", "Z"],
            &[
                ("X", "A", Role::Lead),
                ("Y", "A", Role::Lead),
                ("Z", "A", Role::Work),
                ("X", "B", Role::Lead),
                ("Y", "B", Role::Work),
                ("Z", "B", Role::Work),
            ],
        );
        // A: 2 leads with 2 eligible each gives 4 teams, B: 1 lead gives 2.
        let mut limited = solver(1, 2).with_max_candidates(Some(7));
        assert!(matches!(
            limited.solve(&p),
            Err(SolverError::SearchSpaceTooLarge { candidates: 8, limit: 7 })
        ));
        let mut limited = solver(1, 2).with_max_candidates(Some(8));
        assert_eq!(limited.solve(&p).unwrap().candidates, 8);
    }
}
