mod snapshot;
mod status;
mod submission;

pub use snapshot::FormSnapshot;
pub use status::Status;
pub use submission::Submission;
