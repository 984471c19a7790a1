use crate::model::{Person, Problem, Project, Role};
use eyre::{Result, WrapErr};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::str::FromStr;
use tracing::trace;

/// Reads the `projects`, `members` and `interests` tables.
pub struct Loader {
    conn: AnyConnection,
}

impl Loader {
    pub async fn new(url: &str) -> Result<Self> {
        sqlx::any::install_default_drivers();
        let options = AnyConnectOptions::from_str(url)
            .wrap_err_with(|| format!("invalid database url {url}"))?;
        Ok(Self {
            conn: AnyConnection::connect_with(&options)
                .await
                .wrap_err("cannot connect to database")?,
        })
    }

    pub async fn load(&mut self) -> Result<Problem> {
        let mut problem = Problem::new();
        for project in self.load_projects().await.wrap_err("cannot load projects")? {
            problem.add_project(project);
        }
        for member in self.load_members().await.wrap_err("cannot load members")? {
            problem.add_member(member);
        }
        for (member, project, role) in self
            .load_interests()
            .await
            .wrap_err("cannot load interests")?
        {
            let role = role
                .parse::<Role>()
                .wrap_err_with(|| format!("invalid interest of {member} in {project}"))?;
            trace!(member = %member, project = %project, role = ?role, "interest");
            problem.add_interest(member, project, role);
        }
        Ok(problem)
    }

    async fn load_projects(&mut self) -> Result<Vec<Project>> {
        let names = sqlx::query("SELECT name FROM projects ORDER BY id")
            .try_map(|row: AnyRow| row.try_get::<String, _>("name"))
            .fetch_all(&mut self.conn)
            .await?;
        Ok(names.into_iter().map(Project::from).collect())
    }

    async fn load_members(&mut self) -> Result<Vec<Person>> {
        let names = sqlx::query("SELECT name FROM members ORDER BY id")
            .try_map(|row: AnyRow| row.try_get::<String, _>("name"))
            .fetch_all(&mut self.conn)
            .await?;
        Ok(names.into_iter().map(Person::from).collect())
    }

    async fn load_interests(&mut self) -> Result<Vec<(Person, Project, String)>> {
        let rows = sqlx::query("SELECT member, project, role FROM interests")
            .try_map(|row: AnyRow| {
                Ok((
                    row.try_get::<String, _>("member")?,
                    row.try_get::<String, _>("project")?,
                    row.try_get::<String, _>("role")?,
                ))
            })
            .fetch_all(&mut self.conn)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(member, project, role)| (Person::from(member), Project::from(project), role))
            .collect())
    }
}
