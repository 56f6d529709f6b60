// Wire-shape models for the job-search backend.
// Everything here tolerates absent/null fields: the backend omits columns
// freely and the client degrades to placeholder display text instead of
// failing a whole batch.

pub mod course;
pub mod job;
pub mod profile;
