use std::{env, fs};

use anyhow::Context;
use log::info;
use serde::Deserialize;

use parallel_vi::{HostParallelism, SolverSpec, TabularMdp, solve};

/// A problem file: the model, the solver settings and whether to log every iteration.
#[derive(Deserialize)]
struct Problem {
    mdp: TabularMdp,
    solver: SolverSpec,
    #[serde(default)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: parallel_vi <problem.json>")?;

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let problem: Problem =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    info!("loaded problem from {path}");

    let config = problem.solver.into_config(HostParallelism)?;
    let solution = solve(&config, &problem.mdp, problem.verbose)?;

    info!(
        "finished in {} iterations: {:?}",
        solution.report.iterations,
        solution.status()
    );
    println!("{}", serde_json::to_string_pretty(&solution)?);

    Ok(())
}
