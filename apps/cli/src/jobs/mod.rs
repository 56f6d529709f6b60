// Job post-processing: wire records become display-ready records here.
// Normalization runs once per fetched batch; everything downstream
// (filtering, rendering) reads the normalized form only.

pub mod format;
pub mod normalize;

pub use normalize::{normalize_batch, normalize_job, NormalizedJob};
