mod iteration;
mod report;
mod state;

pub use iteration::{IterationController, Outcome};
pub use report::{IterationStats, SolveReport};
pub use state::{ControllerState, SolveStatus};
