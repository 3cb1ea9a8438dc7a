use serde::{Deserialize, Serialize};

/// How the value buffer is updated during an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateDiscipline {
    /// Double buffered: every backup of a chunk group reads the values frozen before
    /// the group started. Reproducible regardless of scheduling.
    Jacobi,
    /// A single buffer updated in place, fresh values are visible to every worker as
    /// soon as they are written. Faster propagation, schedule dependent results.
    #[default]
    GaussSeidel,
}

impl UpdateDiscipline {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jacobi => "jacobi",
            Self::GaussSeidel => "gauss_seidel",
        }
    }
}
