mod builder;
mod discipline;
mod error;
mod outputs;
mod parallelism;
mod solver;
mod spec;

pub use builder::{DEFAULT_DISCOUNT, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, SolverConfigBuilder};
pub use discipline::UpdateDiscipline;
pub use error::{ConfigErr, Result};
pub use outputs::OutputFlags;
pub use parallelism::{FixedParallelism, HostParallelism, Parallelism};
pub use solver::SolverConfig;
pub use spec::SolverSpec;
