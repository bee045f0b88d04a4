use crate::{
    cli::{Args, Strategy},
    github::tag::Tag,
};
use std::{fmt, path::PathBuf, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid repository '{0}', expected <owner>/<name>")]
    InvalidRepository(String),
}

/// Everything a single invocation needs, resolved from the command line.
#[derive(Debug)]
pub struct Config {
    pub repository: Repository,
    pub release: ReleaseDetails,
    pub event_path: PathBuf,
    pub strategy: Strategy,
    pub api_url: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Config, ConfigError> {
        let slug = args.repository.parse::<RepositorySlug>()?;

        Ok(Config {
            repository: Repository::new(slug.owner, slug.name, args.gh_token),
            release: ReleaseDetails {
                version: args.release_version,
                target: args.target_commitish,
            },
            event_path: args.gh_event_path,
            strategy: args.strategy,
            api_url: args.api_url.trim_end_matches('/').to_owned(),
        })
    }
}

pub struct Repository {
    pub owner: String,
    pub name: String,
    token: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, token: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .finish()
    }
}

struct RepositorySlug {
    owner: String,
    name: String,
}

impl FromStr for RepositorySlug {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository(value.to_owned());

        let (owner, name) = value.split_once('/').ok_or_else(invalid)?;

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(RepositorySlug {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseDetails {
    pub version: String,
    pub target: String,
}

impl ReleaseDetails {
    pub fn tag(&self) -> Tag {
        Tag::new(&self.version)
    }
}
