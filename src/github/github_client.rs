use super::{
    request::{CreateReleaseRequest, TagRefRequest},
    response::{RefResponse, ReleaseResponse},
    tag::Tag,
};
use crate::{
    config::Repository,
    http::{self, Headers, HttpClient, ResponseHandler},
};
use anyhow::Result;

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    owner: String,
    repo: String,
}

impl GithubClient {
    pub fn new(repository: &Repository, api_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(repository.token()),
            api_url: api_url.into(),
            owner: repository.owner.to_owned(),
            repo: repository.name.to_owned(),
        }
    }

    pub async fn create_release(
        &self,
        tag: &Tag,
        target_commitish: &str,
        body: &str,
    ) -> Result<Option<ReleaseResponse>> {
        let uri = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, self.owner, self.repo
        );

        let request = CreateReleaseRequest::new(tag, target_commitish, body);

        log::debug!("creating release {} at {}", tag, uri);
        let response = self.post(&uri, &request).await?;

        Ok(describe(&response))
    }

    pub async fn create_tag(&self, tag: &Tag, sha: &str) -> Result<Option<RefResponse>> {
        let uri = format!(
            "{}/repos/{}/{}/git/refs",
            self.api_url, self.owner, self.repo
        );

        let request = TagRefRequest::new(tag, sha);

        log::debug!("creating {} at {}", request.r#ref, uri);
        let response = self.post(&uri, &request).await?;

        Ok(describe(&response))
    }

    async fn post<T>(&self, uri: &str, request: &T) -> Result<String, http::Error>
    where
        T: serde::Serialize,
    {
        self.http
            .post(uri)
            .default_headers(self.http.token())
            .json(request)
            .send()
            .await
            .handle()
            .await
    }
}

/// Any 2xx already persisted the change; the body is only used for logging.
fn describe<T>(response: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    http::parse::<T>(response)
        .map_err(|err| log::debug!("unexpected response body: {}", err))
        .ok()
}
