mod error;
mod gauss_seidel;
mod jacobi;
mod kernel;
mod sweeper;

pub use error::{Result, WorkerErr};
pub use gauss_seidel::GaussSeidelSweeper;
pub use jacobi::JacobiSweeper;
pub use kernel::BellmanKernel;
pub use sweeper::Sweeper;
