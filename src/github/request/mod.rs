mod create_release_request;
mod tag_ref_request;

pub use create_release_request::CreateReleaseRequest;
pub use tag_ref_request::TagRefRequest;
