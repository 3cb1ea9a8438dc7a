#![allow(dead_code)]

use std::num::NonZeroUsize;

use parallel_vi::{DiscreteMdp, FixedParallelism, SolverConfigBuilder, TabularMdp};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Sixteen hardware threads, a worker cap of eight.
pub fn host() -> FixedParallelism {
    FixedParallelism(NonZeroUsize::new(16).unwrap())
}

pub fn builder(workers: usize) -> SolverConfigBuilder {
    SolverConfigBuilder::new(workers).parallelism(host())
}

pub fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Three states, two actions.
///
/// * state 0: stay (reward 0) or move to 1 (reward 1)
/// * state 1: coin flip between 0 and 2 (reward 0) or move to 2 (reward 2)
/// * state 2: stay (reward 1) or move to 0 (reward 0)
///
/// With a discount of 0.95 the optimal values are `[20.95, 21, 20]` and the optimal
/// policy is `[1, 1, 0]`.
pub fn three_state_mdp() -> TabularMdp {
    TabularMdp::new(
        2,
        vec![
            vec![vec![(0, 1.0)], vec![(1, 1.0)]],
            vec![vec![(0, 0.5), (2, 0.5)], vec![(2, 1.0)]],
            vec![vec![(2, 1.0)], vec![(0, 1.0)]],
        ],
        vec![vec![0.0, 1.0], vec![0.0, 2.0], vec![1.0, 0.0]],
    )
    .unwrap()
}

pub const THREE_STATE_VALUES: [f64; 3] = [20.95, 21.0, 20.0];
pub const THREE_STATE_POLICY: [usize; 3] = [1, 1, 0];

/// A dense random model with up to five successors per transition.
pub fn random_mdp(seed: u64, states: usize, actions: usize) -> TabularMdp {
    let mut rng = StdRng::seed_from_u64(seed);

    let transitions = (0..states)
        .map(|_| {
            (0..actions)
                .map(|_| {
                    let n = rng.random_range(1..=5);
                    let weights: Vec<f64> = (0..n).map(|_| rng.random::<f64>() + 0.01).collect();
                    let total: f64 = weights.iter().sum();

                    weights
                        .into_iter()
                        .map(|w| (rng.random_range(0..states), w / total))
                        .collect()
                })
                .collect()
        })
        .collect();

    let rewards = (0..states)
        .map(|_| (0..actions).map(|_| rng.random_range(-1.0..1.0)).collect())
        .collect();

    TabularMdp::new(actions, transitions, rewards).unwrap()
}

/// What the single threaded solver produces.
pub struct Reference {
    pub values: Vec<f64>,
    /// State-major, `q[s][a]`.
    pub q: Vec<Vec<f64>>,
    pub iterations: usize,
    pub converged: bool,
}

/// Plain sequential Jacobi value iteration, backing up states in index order.
pub fn reference_solve<M: DiscreteMdp>(
    mdp: &M,
    discount: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Reference {
    let nstates = mdp.num_states();
    let nactions = mdp.num_actions();
    let mut values = vec![0.0; nstates];
    let mut q = vec![vec![0.0; nactions]; nstates];

    for iteration in 1..=max_iterations {
        let mut next = vec![0.0; nstates];
        let mut residual = 0.0_f64;

        for s in 0..nstates {
            let mut best = f64::NEG_INFINITY;

            for a in 0..nactions {
                let (successors, probabilities) = mdp.next_states(s, a);
                let expected = successors
                    .iter()
                    .zip(probabilities)
                    .fold(0.0, |acc, (&n, &p)| acc + p * values[n]);

                q[s][a] = mdp.reward(s, a) + discount * expected;
                if a == 0 || q[s][a] > best {
                    best = q[s][a];
                }
            }

            next[s] = best;
            let diff = best - values[s];
            residual = residual.max(diff * diff);
        }

        values = next;
        if residual < tolerance {
            return Reference {
                values,
                q,
                iterations: iteration,
                converged: true,
            };
        }
    }

    Reference {
        values,
        q,
        iterations: max_iterations,
        converged: false,
    }
}

/// Transposes an action-major `Q[a][s]` into state-major rows.
pub fn state_major(q_values: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let nstates = q_values.first().map_or(0, Vec::len);

    (0..nstates)
        .map(|s| q_values.iter().map(|row| row[s]).collect())
        .collect()
}

pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
