//! # parallel_vi
//!
//! Optimal value function, action values and greedy policy of finite discrete Markov
//! Decision Processes, computed with value iteration spread over the cores of a single
//! machine.
//!
//! ## Overview
//!
//! Every iteration walks the configured chunk groups in order. Each group is split
//! into one balanced sub-range per worker ([`partition`]), the workers back up their
//! states concurrently ([`sweep`]) and the iteration controller joins them before the
//! next group starts ([`controller`]). Once the maximum squared value change of an
//! iteration falls below the tolerance, or the iteration cap is hit, the greedy policy
//! is read off the Q-matrix ([`policy`]).
//!
//! Two update disciplines are available:
//!
//! | Discipline | Buffers | Reads | Reproducible |
//! |------------|---------|-------|--------------|
//! | [`UpdateDiscipline::Jacobi`] | two | values frozen before the group | yes |
//! | [`UpdateDiscipline::GaussSeidel`] | one, in place | freshest visible value | no |
//!
//! Workers never share a write index: every dispatch hands each one an exclusive
//! slice of the buffers ([`storage::split_disjoint_mut`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use parallel_vi::{SolverConfigBuilder, TabularMdp, UpdateDiscipline, solve};
//!
//! let mdp = TabularMdp::deterministic(
//!     vec![vec![0, 1], vec![1, 0]],
//!     vec![vec![0.0, 1.0], vec![2.0, 0.0]],
//! )?;
//! let config = SolverConfigBuilder::new(2)
//!     .discipline(UpdateDiscipline::Jacobi)
//!     .discount(0.9)
//!     .build()?;
//!
//! let solution = solve(&config, &mdp, false)?;
//! println!("{:?}", solution.policy);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod mdp;
pub mod partition;
pub mod policy;
pub mod solver;
pub mod storage;
pub mod sweep;

pub use config::{
    ConfigErr, FixedParallelism, HostParallelism, OutputFlags, Parallelism, SolverConfig,
    SolverConfigBuilder, SolverSpec, UpdateDiscipline,
};
pub use controller::{SolveReport, SolveStatus};
pub use error::SolveErr;
pub use mdp::{DiscreteMdp, MdpErr, TabularMdp};
pub use policy::Solution;
pub use solver::solve;
pub use sweep::WorkerErr;
