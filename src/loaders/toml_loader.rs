use crate::model::{Person, Problem, Project, Role};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Declaration {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    members: Vec<Person>,
    #[serde(default, rename = "interest")]
    interests: Vec<InterestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InterestEntry {
    member: Person,
    #[serde(default)]
    lead: Vec<Project>,
    #[serde(default)]
    work: Vec<Project>,
}

pub fn load(path: &Path) -> Result<Problem> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read interests from {}", path.display()))?;
    parse(&content).wrap_err_with(|| format!("cannot parse {}", path.display()))
}

pub fn parse(content: &str) -> Result<Problem> {
    let declaration: Declaration = toml::from_str(content)?;
    let mut problem = Problem::new();
    for project in declaration.projects {
        problem.add_project(project);
    }
    for member in declaration.members {
        problem.add_member(member);
    }
    for entry in declaration.interests {
        for project in entry.lead {
            problem.add_interest(entry.member.clone(), project, Role::Lead);
        }
        for project in entry.work {
            problem.add_interest(entry.member.clone(), project, Role::Work);
        }
    }
    Ok(problem)
}
