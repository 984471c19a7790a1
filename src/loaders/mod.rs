use crate::config::{InputConfig, Source};
use crate::model::Problem;
use eyre::{Result, eyre};
use std::path::Path;
use tracing::info;

pub use self::database::Loader as DatabaseLoader;

pub mod csv_loader;
mod database;
pub mod toml_loader;

fn input_path(input: &InputConfig) -> Result<&Path> {
    input
        .path
        .as_deref()
        .ok_or_else(|| eyre!("no input file configured (input.path or --input)"))
}

/// Load the problem from the configured source.
pub async fn load(input: &InputConfig) -> Result<Problem> {
    let problem = match input.source {
        Source::Toml => toml_loader::load(input_path(input)?)?,
        Source::Csv => csv_loader::load(input_path(input)?)?,
        Source::Database => {
            let url = input
                .url
                .as_deref()
                .ok_or_else(|| eyre!("no database configured (input.url or --database)"))?;
            DatabaseLoader::new(url).await?.load().await?
        }
    };
    info!(
        projects = problem.projects.len(),
        members = problem.members.len(),
        "problem loaded"
    );
    Ok(problem)
}
