mod github_client;
mod request;
mod response;
pub mod tag;

pub use github_client::GithubClient;
