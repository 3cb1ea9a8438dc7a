use serde::{Deserialize, Serialize};

/// Selects which results are copied out of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFlags {
    pub values: bool,
    pub q_values: bool,
    pub policy: bool,
}

impl OutputFlags {
    /// Every output enabled.
    pub const ALL: Self = Self {
        values: true,
        q_values: true,
        policy: true,
    };
}

impl Default for OutputFlags {
    fn default() -> Self {
        Self::ALL
    }
}
