mod extract;
mod solution;

pub use extract::extract_policy;
pub use solution::Solution;
