use crate::github::tag::Tag;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    /// A published, non-prerelease release named after its tag.
    pub fn new(tag: &Tag, target_commitish: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tag_name: tag.value().to_owned(),
            target_commitish: target_commitish.into(),
            name: tag.value().to_owned(),
            body: body.into(),
            draft: false,
            prerelease: false,
        }
    }
}
