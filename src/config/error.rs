use std::{
    error::Error,
    fmt::{self, Display},
    ops::Range,
};

/// The specific result type for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigErr>;

/// Error returned whenever a `SolverConfig` can't be built or doesn't fit the model it's
/// asked to solve. It is always raised before any buffer is allocated.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigErr {
    /// Parallel value iteration needs at least two workers.
    TooFewWorkers(usize),
    /// More workers than the host parallelism allows.
    TooManyWorkers { workers: usize, cap: usize },
    /// The tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// The discount factor isn't in `[0, 1]`.
    InvalidDiscount(f64),
    /// The model has no actions, so no state has a value.
    NoActions,
    /// A chunk group doesn't fit in the state space.
    ChunkGroupOutOfBounds { group: Range<usize>, states: usize },
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewWorkers(workers) => {
                write!(f, "invalid config: {workers} workers, at least 2 are required")
            }
            Self::TooManyWorkers { workers, cap } => {
                write!(f, "invalid config: {workers} workers exceed the host cap of {cap}")
            }
            Self::InvalidTolerance(tol) => write!(f, "invalid config: tolerance {tol}"),
            Self::InvalidDiscount(discount) => {
                write!(f, "invalid config: discount {discount} is not in [0, 1]")
            }
            Self::NoActions => f.write_str("invalid config: the model has no actions"),
            Self::ChunkGroupOutOfBounds { group, states } => write!(
                f,
                "invalid config: chunk group {group:?} doesn't fit in {states} states"
            ),
        }
    }
}

impl Error for ConfigErr {}
