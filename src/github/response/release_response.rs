use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    #[serde(default)]
    pub html_url: String,
}
