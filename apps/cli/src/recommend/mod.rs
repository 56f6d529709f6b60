// Course-recommendation support: which skills to ask about, how valuable a
// skill looks, and what to show when the backend is unreachable.

pub mod boost;
pub mod fallback;
pub mod gap;

pub use boost::skill_boost;
pub use gap::{canon, is_skill_matched, sample_seeds, unmatched_skills};
