use crate::github::tag::Tag;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagRefRequest {
    pub r#ref: String,
    pub sha: String,
}

impl TagRefRequest {
    pub fn new(tag: &Tag, sha: impl Into<String>) -> Self {
        Self {
            r#ref: tag.git_ref(),
            sha: sha.into(),
        }
    }
}
