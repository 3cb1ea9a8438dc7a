mod discrete;
mod error;
mod tabular;
mod transition;

pub use discrete::DiscreteMdp;
pub use error::{MdpErr, Result, TransitionErr};
pub use tabular::{TabularMdp, TabularSpec};
pub(crate) use transition::{check_reward, check_transition};
