use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Publishes a merged pull request as a GitHub release or a lightweight tag.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Repository in `owner/name` form.
    pub repository: String,

    /// Commit SHA or ref the release or tag points at.
    pub target_commitish: String,

    #[arg(value_name = "VERSION")]
    /// Version, used as tag name and release name.
    pub release_version: String,

    /// GitHub access token.
    pub gh_token: String,

    /// Path to the pull request event payload.
    pub gh_event_path: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Strategy::Release)]
    /// Release strategy.
    pub strategy: Strategy,

    #[arg(long, default_value = DEFAULT_API_URL)]
    /// Base URL of the GitHub API.
    pub api_url: String,

    #[arg(short, long, default_value_t = false)]
    /// Enable debug logging.
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Do nothing.
    None,
    /// Create a release with the pull request body as notes.
    Release,
    /// Create a lightweight tag.
    Tag,
}
