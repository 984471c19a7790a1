use eyre::{Report, Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "teamsolver.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub solver: SolverConfig,
    pub input: InputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum number of non-lead members on a project.
    pub max_members_per_project: usize,
    pub max_projects_per_person: usize,
    /// Number of assignments to show.
    pub samples: usize,
    pub seed: Option<u64>,
    pub max_candidates: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            max_members_per_project: 1,
            max_projects_per_person: 1,
            samples: 10,
            seed: None,
            max_candidates: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Toml,
    Csv,
    Database,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub source: Source,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
}

impl InputConfig {
    /// Read from `path`, guessing the format from its extension.
    pub fn use_file(&mut self, path: PathBuf) {
        self.source = if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        {
            Source::Csv
        } else {
            Source::Toml
        };
        self.path = Some(path);
    }

    pub fn use_database(&mut self, url: String) {
        self.source = Source::Database;
        self.url = Some(url);
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        content.parse()
    }

    /// Load `file_name` if given, the default configuration file if it
    /// exists, or use built-in defaults.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}

impl std::str::FromStr for Config {
    type Err = Report;

    fn from_str(s: &str) -> Result<Config> {
        toml::from_str(s).wrap_err("cannot parse configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.solver.max_members_per_project, 1);
        assert_eq!(config.solver.max_projects_per_person, 1);
        assert_eq!(config.solver.samples, 10);
        assert_eq!(config.solver.seed, None);
        assert_eq!(config.input.source, Source::Toml);
        assert!(config.input.path.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
            [solver]
            max_members_per_project = 3
            max_projects_per_person = 2
            samples = 5
            seed = 42
            max_candidates = 100000

            [input]
            source = "database"
            url = "mysql://solver@localhost/teams"
        "#
        .parse()
        .unwrap();
        assert_eq!(config.solver.max_members_per_project, 3);
        assert_eq!(config.solver.max_projects_per_person, 2);
        assert_eq!(config.solver.samples, 5);
        assert_eq!(config.solver.seed, Some(42));
        assert_eq!(config.solver.max_candidates, Some(100_000));
        assert_eq!(config.input.source, Source::Database);
        assert_eq!(
            config.input.url.as_deref(),
            Some("mysql://solver@localhost/teams")
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!("[solver]\nmax_member = 2\n".parse::<Config>().is_err());
        assert!("[input]\nsource = \"xml\"\n".parse::<Config>().is_err());
    }

    #[test]
    fn test_source_from_extension() {
        let mut input = InputConfig::default();
        input.use_file(PathBuf::from("interests.CSV"));
        assert_eq!(input.source, Source::Csv);
        input.use_file(PathBuf::from("interests.toml"));
        assert_eq!(input.source, Source::Toml);
        input.use_database("sqlite://teams.db".to_owned());
        assert_eq!(input.source, Source::Database);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teamsolver.toml");
        std::fs::write(&path, "[solver]\nsamples = 3\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().solver.samples, 3);
        assert!(Config::load(&dir.path().join("missing.toml")).is_err());
    }
}
