use std::fmt::Display;

const TAG_REF_PREFIX: &str = "refs/tags/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    /// Fully qualified reference name, e.g. `refs/tags/v1.0.0`
    pub fn git_ref(&self) -> String {
        format!("{}{}", TAG_REF_PREFIX, self.name)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
