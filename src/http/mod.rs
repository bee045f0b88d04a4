use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";
const AGENT: &str = "pr-release";

pub struct HttpClient {
    client: Client,
    token: String,
}

impl HttpClient {
    pub fn new(token: impl Into<String>) -> Self {
        HttpClient {
            client: Client::new(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, AGENT)
    }
}

pub trait ResponseHandler {
    /// Returns the body text of a successful (2xx) response.
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::GenericResponseError {
                status,
                message: text,
            });
        }

        Ok(text)
    }
}

pub fn parse<T>(text: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|cause| Error::ParseResponseError { cause })
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed with status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
