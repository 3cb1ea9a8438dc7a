use std::{num::NonZeroUsize, ops::Range};

use serde::{Deserialize, Serialize};

use super::{
    OutputFlags, Parallelism, Result, SolverConfig, SolverConfigBuilder, UpdateDiscipline,
    builder::{DEFAULT_DISCOUNT, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE},
};

/// The serializable description of a solver, as read from a problem file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSpec {
    pub workers: usize,
    #[serde(default)]
    pub chunk_groups: Option<Vec<Range<usize>>>,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: NonZeroUsize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub discipline: UpdateDiscipline,
    #[serde(default = "default_discount")]
    pub discount: f64,
    #[serde(default)]
    pub outputs: OutputFlags,
}

fn default_max_iterations() -> NonZeroUsize {
    DEFAULT_MAX_ITERATIONS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_discount() -> f64 {
    DEFAULT_DISCOUNT
}

impl SolverSpec {
    /// Validates this spec into a `SolverConfig`.
    ///
    /// # Arguments
    /// * `parallelism` - The host parallelism used to cap the worker count.
    ///
    /// # Returns
    /// The config or the `ConfigErr` raised by `SolverConfigBuilder::build`.
    pub fn into_config<P>(self, parallelism: P) -> Result<SolverConfig>
    where
        P: Parallelism + 'static,
    {
        let mut builder = SolverConfigBuilder::new(self.workers)
            .max_iterations(self.max_iterations)
            .tolerance(self.tolerance)
            .discipline(self.discipline)
            .discount(self.discount)
            .outputs(self.outputs)
            .parallelism(parallelism);

        if let Some(groups) = self.chunk_groups {
            builder = builder.chunk_groups(groups);
        }

        builder.build()
    }
}
