use crate::{
    cli::Strategy,
    config::{Config, ReleaseDetails},
    event::{self, PullRequest},
    github::GithubClient,
};
use anyhow::{Context, Result};

/// Loads the pull request event and applies the configured strategy.
pub async fn execute(config: &Config) -> Result<()> {
    log::debug!(
        "repository {}/{}, strategy {:?}",
        config.repository.owner,
        config.repository.name,
        config.strategy
    );

    let event = event::load(&config.event_path).await?;
    let client = GithubClient::new(&config.repository, &config.api_url);

    run(config.strategy, &client, &config.release, &event.pull_request).await
}

pub async fn run(
    strategy: Strategy,
    client: &GithubClient,
    release: &ReleaseDetails,
    pull_request: &PullRequest,
) -> Result<()> {
    match strategy {
        Strategy::None => {
            log::info!("Strategy is none, nothing to do");
            Ok(())
        }
        Strategy::Release => create_release(client, release, pull_request)
            .await
            .context("could not create GitHub release"),
        Strategy::Tag => create_lightweight_tag(client, release)
            .await
            .context("could not create lightweight tag"),
    }
}

async fn create_release(
    client: &GithubClient,
    release: &ReleaseDetails,
    pull_request: &PullRequest,
) -> Result<()> {
    log::info!("Pull request body:");
    log::info!("{}", pull_request.body());

    let response = client
        .create_release(&release.tag(), &release.target, pull_request.body())
        .await?;

    match response {
        Some(response) => log::info!(
            "Created release {} with id {} ({})",
            release.version,
            response.id,
            response.html_url
        ),
        None => log::info!("Created release {}", release.version),
    }

    Ok(())
}

async fn create_lightweight_tag(client: &GithubClient, release: &ReleaseDetails) -> Result<()> {
    let response = client
        .create_tag(&release.tag(), &release.target)
        .await?;

    match response {
        Some(response) => log::info!("Created {} at {}", response.r#ref, response.object.sha),
        None => log::info!("Created {}", release.tag().git_ref()),
    }

    Ok(())
}
