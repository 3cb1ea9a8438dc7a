mod q_matrix;
mod split;
mod values;

pub use q_matrix::QMatrix;
pub use split::split_disjoint_mut;
pub use values::{DoubleBuffer, SharedValues};
