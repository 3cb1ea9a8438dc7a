use std::{
    error::Error,
    fmt::{self, Display},
};

/// The specific result type for building models inside the mdp module.
pub type Result<T> = std::result::Result<T, MdpErr>;

/// The ways a single `(state, action)` transition can be malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionErr {
    /// The successor and probability slices have different lengths.
    LengthMismatch { successors: usize, probabilities: usize },
    /// A successor index falls outside the state space.
    SuccessorOutOfRange { successor: usize, states: usize },
    /// A probability is negative, greater than one or not finite.
    InvalidProbability(f64),
    /// The probabilities don't add up to one.
    ProbabilitySum(f64),
    /// The reward is `NaN` or infinite.
    NonFiniteReward(f64),
}

impl Display for TransitionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                successors,
                probabilities,
            } => write!(
                f,
                "{successors} successors but {probabilities} probabilities"
            ),
            Self::SuccessorOutOfRange { successor, states } => {
                write!(f, "successor {successor} is out of range for {states} states")
            }
            Self::InvalidProbability(p) => write!(f, "invalid probability {p}"),
            Self::ProbabilitySum(sum) => write!(f, "probabilities sum to {sum}, expected 1"),
            Self::NonFiniteReward(r) => write!(f, "non finite reward {r}"),
        }
    }
}

impl Error for TransitionErr {}

/// Error returned when building a `TabularMdp` out of inconsistent tables.
#[derive(Debug, Clone, PartialEq)]
pub enum MdpErr {
    /// The model has no actions to choose from.
    NoActions,
    /// A table doesn't have the expected amount of rows.
    ShapeMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    /// The transition of `(state, action)` is malformed.
    Transition {
        state: usize,
        action: usize,
        kind: TransitionErr,
    },
}

impl Display for MdpErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActions => f.write_str("MDP error: the model has no actions"),
            Self::ShapeMismatch {
                table,
                expected,
                found,
            } => write!(
                f,
                "MDP error: expected {expected} rows in the {table} table, found {found}"
            ),
            Self::Transition {
                state,
                action,
                kind,
            } => write!(f, "MDP error: state {state}, action {action}: {kind}"),
        }
    }
}

impl Error for MdpErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transition { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
