use crate::model::{Person, Problem, Project, Role};
use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// One line of `member,project,role`. A line with a single name only
/// declares that member or project.
#[derive(Debug, Deserialize)]
struct Record {
    member: Option<Person>,
    project: Option<Project>,
    role: Option<Role>,
}

pub fn load(path: &Path) -> Result<Problem> {
    let file = File::open(path)
        .wrap_err_with(|| format!("cannot read interests from {}", path.display()))?;
    read(file).wrap_err_with(|| format!("cannot parse {}", path.display()))
}

pub fn read<R: io::Read>(reader: R) -> Result<Problem> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut problem = Problem::new();
    for (n, record) in reader.deserialize::<Record>().enumerate() {
        let record = record.wrap_err_with(|| format!("invalid record {}", n + 1))?;
        match (record.member, record.project) {
            (Some(member), Some(project)) => {
                problem.declare_member(member.clone());
                problem.declare_project(project.clone());
                problem.add_interest(member, project, record.role.unwrap_or_default());
            }
            (Some(member), None) => {
                ensure!(
                    record.role.is_none(),
                    "record {} has a role but no project",
                    n + 1
                );
                problem.declare_member(member);
            }
            (None, Some(project)) => {
                ensure!(
                    record.role.is_none(),
                    "record {} has a role but no member",
                    n + 1
                );
                problem.declare_project(project);
            }
            (None, None) => {}
        }
    }
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_read() {
        let data = "\
member,project,role
Ann,Compiler,lead
Ann, Website ,
Bob,Compiler,work
Cid,,
,Docs,
";
        let problem = read(data.as_bytes()).unwrap();
        assert_eq!(
            problem.projects,
            vec![
                Project::from("Compiler"),
                Project::from("Website"),
                Project::from("Docs")
            ]
        );
        assert_eq!(
            problem.members,
            vec![Person::from("Ann"), Person::from("Bob"), Person::from("Cid")]
        );
        let ann = &problem.interests[&Person::from("Ann")];
        assert_eq!(ann.lead, BTreeSet::from([Project::from("Compiler")]));
        assert_eq!(ann.work, BTreeSet::from([Project::from("Website")]));
        assert_eq!(
            problem.interests[&Person::from("Bob")].work,
            BTreeSet::from([Project::from("Compiler")])
        );
    }

    #[test]
    fn test_invalid_records() {
        assert!(read("member,project,role\nAnn,Compiler,boss\n".as_bytes()).is_err());
        assert!(read("member,project,role\nAnn,,lead\n".as_bytes()).is_err());
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interests.csv");
        std::fs::write(&path, "member,project,role\nAnn,Compiler,lead\n").unwrap();
        assert_eq!(load(&path).unwrap().members, vec![Person::from("Ann")]);
    }
}
