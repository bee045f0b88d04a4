use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// The subset of a `pull_request` webhook payload this tool consumes.
#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub action: Option<String>,
    pub number: Option<u64>,
    pub pull_request: PullRequest,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: Option<u64>,
    pub title: Option<String>,
    body: Option<String>,
    pub merged: Option<bool>,
}

impl PullRequest {
    /// Body text, empty when GitHub sends `null`.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

pub async fn load(path: &Path) -> Result<PullRequestEvent> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("could not read GitHub event file {}", path.display()))?;

    let event = parse(&content)?;

    log::debug!(
        "loaded {} event for pull request #{} {:?} (merged: {})",
        event.action.as_deref().unwrap_or("unknown"),
        event.pull_request.number.or(event.number).unwrap_or_default(),
        event.pull_request.title.as_deref().unwrap_or_default(),
        event.pull_request.merged.unwrap_or_default()
    );

    Ok(event)
}

pub fn parse(content: impl AsRef<[u8]>) -> Result<PullRequestEvent> {
    serde_json::from_slice::<PullRequestEvent>(content.as_ref())
        .context("could not parse GitHub event into a pull request event")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    const MERGED_EVENT: &str = r#"{
        "action": "closed",
        "number": 4,
        "pull_request": {
            "number": 4,
            "title": "Release v2.0.0",
            "body": "Fixes #4",
            "merged": true,
            "html_url": "https://github.com/acme/widgets/pull/4",
            "user": { "login": "octocat" }
        },
        "repository": { "full_name": "acme/widgets" }
    }"#;

    #[tokio::test]
    async fn should_load_pull_request_event_from_file() -> Result<()> {
        let dir = TempDir::new("event")?;
        let path = dir.path().join("event.json");
        fs::write(&path, MERGED_EVENT)?;

        let event = load(&path).await?;

        assert_eq!(event.action.as_deref(), Some("closed"));
        assert_eq!(event.pull_request.body(), "Fixes #4");
        assert_eq!(event.pull_request.title.as_deref(), Some("Release v2.0.0"));
        assert_eq!(event.pull_request.merged, Some(true));

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_file_is_missing() -> Result<()> {
        let dir = TempDir::new("event")?;
        let path = dir.path().join("missing.json");

        let err = load(&path).await.unwrap_err();

        assert!(err.to_string().starts_with("could not read GitHub event file"));

        Ok(())
    }

    #[tokio::test]
    async fn should_report_non_utf8_file_as_parse_failure() -> Result<()> {
        let dir = TempDir::new("event")?;
        let path = dir.path().join("event.json");
        fs::write(&path, [0xff, 0xfe, 0x7b, 0x7d])?;

        let err = load(&path).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "could not parse GitHub event into a pull request event"
        );

        Ok(())
    }

    #[test]
    fn should_treat_null_body_as_empty() {
        let event = parse(r#"{"pull_request": {"body": null}}"#).unwrap();

        assert_eq!(event.pull_request.body(), "");
    }

    #[test]
    fn should_treat_missing_body_as_empty() {
        let event = parse(r#"{"pull_request": {}}"#).unwrap();

        assert_eq!(event.pull_request.body(), "");
    }

    #[test]
    fn should_keep_body_verbatim() {
        let event =
            parse(r#"{"pull_request": {"body": "  ## Notes\r\n- one\n- two\n"}}"#).unwrap();

        assert_eq!(event.pull_request.body(), "  ## Notes\r\n- one\n- two\n");
    }

    #[test]
    fn should_reject_events_without_pull_request() {
        let err = parse(r#"{"ref": "refs/heads/main", "commits": []}"#).unwrap_err();

        assert_eq!(
            err.to_string(),
            "could not parse GitHub event into a pull request event"
        );
    }

    #[test]
    fn should_reject_invalid_json() {
        assert!(parse("not json").is_err());
        assert!(parse("[1, 2, 3]").is_err());
    }
}
