use std::ops::Range;

use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    config::{SolverConfig, UpdateDiscipline},
    controller::{IterationController, Outcome, SolveStatus},
    error::Result,
    mdp::DiscreteMdp,
    policy::{Solution, extract_policy},
    storage::QMatrix,
    sweep::{self, BellmanKernel, GaussSeidelSweeper, JacobiSweeper, Sweeper},
};

/// Solves `mdp` with parallel value iteration.
///
/// The config is checked against the model before anything is allocated. The value
/// buffer(s), the Q-matrix and a pool of exactly `config.workers()` threads live only
/// for the duration of the call; the selected outputs are copied out.
///
/// # Arguments
/// * `config` - A validated solver configuration.
/// * `mdp` - The model, only read during the solve.
/// * `verbose` - Whether per iteration diagnostics are logged at `info` level instead
///   of `debug`.
///
/// # Returns
/// The selected outputs and a report, `SolveStatus::IterationLimitReached` not being an
/// error. Fails with a `SolveErr` on a config that doesn't fit the model or on the
/// first worker error.
pub fn solve<M: DiscreteMdp>(config: &SolverConfig, mdp: &M, verbose: bool) -> Result<Solution> {
    let nstates = mdp.num_states();
    let nactions = mdp.num_actions();
    config.check_shape(nstates, nactions)?;

    let workers = config.workers();
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|i| format!("bellman-{i}"))
        .build()?;

    debug!(
        states = nstates,
        actions = nactions,
        workers = workers.get(),
        discipline = config.discipline().name();
        "starting solve"
    );

    let kernel = BellmanKernel::new(mdp, config.discount());
    let q = QMatrix::new(nstates, nactions);
    let groups = config.chunk_groups(nstates);

    let outcome = match config.discipline() {
        UpdateDiscipline::Jacobi => drive(
            &pool,
            config,
            kernel,
            JacobiSweeper::new(nstates),
            q,
            groups,
            verbose,
        ),
        UpdateDiscipline::GaussSeidel => drive(
            &pool,
            config,
            kernel,
            GaussSeidelSweeper::new(nstates),
            q,
            groups,
            verbose,
        ),
    }?;

    let report = &outcome.report;
    match report.status {
        SolveStatus::Converged if verbose => {
            info!(iterations = report.iterations, residual = report.residual; "converged")
        }
        SolveStatus::Converged => {
            debug!(iterations = report.iterations, residual = report.residual; "converged")
        }
        SolveStatus::IterationLimitReached => warn!(
            iterations = report.iterations,
            residual = report.residual;
            "iteration limit reached before convergence"
        ),
    }

    let outputs = config.outputs();
    let policy = outputs
        .policy
        .then(|| pool.install(|| extract_policy(&outcome.q)));

    Ok(Solution {
        values: outputs.values.then_some(outcome.values),
        q_values: outputs.q_values.then(|| outcome.q.to_action_major()),
        policy,
        report: outcome.report,
    })
}

/// Runs a controller for one concrete update discipline inside the solve's pool.
fn drive<M, S>(
    pool: &ThreadPool,
    config: &SolverConfig,
    kernel: BellmanKernel<'_, M>,
    sweeper: S,
    q: QMatrix,
    groups: Vec<Range<usize>>,
    verbose: bool,
) -> sweep::Result<Outcome>
where
    M: DiscreteMdp,
    S: Sweeper,
{
    let controller = IterationController::new(
        kernel,
        sweeper,
        q,
        groups,
        config.workers(),
        config.tolerance(),
        config.max_iterations(),
        verbose,
    );

    pool.install(move || controller.run())
}
