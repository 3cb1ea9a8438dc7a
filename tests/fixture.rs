mod common;

use common::{
    THREE_STATE_POLICY, THREE_STATE_VALUES, builder, max_abs_diff, nz, reference_solve,
    state_major, three_state_mdp,
};
use parallel_vi::{OutputFlags, SolveStatus, TabularMdp, UpdateDiscipline, solve};

const DISCOUNT: f64 = 0.95;

#[test]
fn test_jacobi_matches_reference_at_default_tolerance() {
    let mdp = three_state_mdp();
    let config = builder(2)
        .discipline(UpdateDiscipline::Jacobi)
        .discount(DISCOUNT)
        .build()
        .unwrap();

    let solution = solve(&config, &mdp, false).unwrap();
    let reference = reference_solve(&mdp, DISCOUNT, 1e-3, 1000);

    assert!(solution.converged());
    assert!(reference.converged);
    assert!(solution.report.iterations <= 100);
    assert_eq!(solution.report.iterations, reference.iterations);

    let values = solution.values.unwrap();
    assert_eq!(values, reference.values);
    assert!(max_abs_diff(&values, &THREE_STATE_VALUES) < 1.0);

    let q = state_major(&solution.q_values.unwrap());
    assert_eq!(q, reference.q);

    assert_eq!(solution.policy.unwrap(), THREE_STATE_POLICY);
}

#[test]
fn test_tight_tolerance_reaches_optimal_values() {
    let mdp = three_state_mdp();

    for discipline in [UpdateDiscipline::Jacobi, UpdateDiscipline::GaussSeidel] {
        for workers in [2, 4, 8] {
            let config = builder(workers)
                .discipline(discipline)
                .discount(DISCOUNT)
                .tolerance(1e-20)
                .max_iterations(nz(5000))
                .build()
                .unwrap();

            let solution = solve(&config, &mdp, false).unwrap();

            assert_eq!(solution.status(), SolveStatus::Converged);
            let values = solution.values.unwrap();
            assert!(
                max_abs_diff(&values, &THREE_STATE_VALUES) < 1e-6,
                "{discipline:?} with {workers} workers: {values:?}"
            );
            assert_eq!(solution.policy.unwrap(), THREE_STATE_POLICY);
        }
    }
}

#[test]
fn test_gauss_seidel_converges_close_to_optimal() {
    let mdp = three_state_mdp();
    let config = builder(2).discount(DISCOUNT).build().unwrap();

    let solution = solve(&config, &mdp, false).unwrap();

    assert!(solution.converged());
    assert!(solution.report.residual < 1e-3);
    assert!(max_abs_diff(&solution.values.unwrap(), &THREE_STATE_VALUES) < 1.0);
    assert_eq!(solution.policy.unwrap(), THREE_STATE_POLICY);
}

#[test]
fn test_policy_holds_the_largest_q_value() {
    let mdp = three_state_mdp();
    let config = builder(4).discount(DISCOUNT).build().unwrap();

    let solution = solve(&config, &mdp, false).unwrap();
    let q = state_major(&solution.q_values.unwrap());
    let policy = solution.policy.unwrap();

    for (s, row) in q.iter().enumerate() {
        let best = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(row[policy[s]], best);
    }
}

#[test]
fn test_values_equal_best_q_value() {
    let mdp = three_state_mdp();
    let config = builder(2)
        .discipline(UpdateDiscipline::Jacobi)
        .discount(DISCOUNT)
        .build()
        .unwrap();

    let solution = solve(&config, &mdp, false).unwrap();
    let q = state_major(&solution.q_values.unwrap());
    let values = solution.values.unwrap();

    for (s, row) in q.iter().enumerate() {
        let best = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(values[s], best);
    }
}

#[test]
fn test_iteration_limit_is_a_status() {
    let mdp = three_state_mdp();
    let config = builder(2)
        .discipline(UpdateDiscipline::Jacobi)
        .discount(DISCOUNT)
        .max_iterations(nz(5))
        .build()
        .unwrap();

    let solution = solve(&config, &mdp, false).unwrap();
    let reference = reference_solve(&mdp, DISCOUNT, 1e-3, 5);

    assert!(!reference.converged);
    assert_eq!(solution.status(), SolveStatus::IterationLimitReached);
    assert_eq!(solution.report.iterations, 5);
    assert_eq!(solution.report.trace.len(), 5);
    assert!(solution.report.residual >= 1e-3);
    assert_eq!(solution.values.unwrap(), reference.values);
}

#[test]
fn test_output_flags_select_outputs() {
    let mdp = three_state_mdp();
    let config = builder(2)
        .discount(DISCOUNT)
        .outputs(OutputFlags {
            values: true,
            q_values: false,
            policy: false,
        })
        .build()
        .unwrap();

    let solution = solve(&config, &mdp, false).unwrap();

    assert!(solution.values.is_some());
    assert!(solution.q_values.is_none());
    assert!(solution.policy.is_none());
}

#[test]
fn test_q_values_are_action_major() {
    let mdp = three_state_mdp();
    let config = builder(2).discount(DISCOUNT).build().unwrap();

    let q_values = solve(&config, &mdp, false).unwrap().q_values.unwrap();

    assert_eq!(q_values.len(), 2);
    assert!(q_values.iter().all(|row| row.len() == 3));
}

#[test]
fn test_chunk_groups_run_in_order() {
    // 0 -> 1 -> 2 -> 2, only the self loop on 2 pays.
    let mdp = TabularMdp::deterministic(
        vec![vec![1], vec![2], vec![2]],
        vec![vec![0.0], vec![0.0], vec![1.0]],
    )
    .unwrap();

    let single = builder(2)
        .discipline(UpdateDiscipline::Jacobi)
        .discount(0.5)
        .max_iterations(nz(1))
        .build()
        .unwrap();
    let backwards = builder(2)
        .discipline(UpdateDiscipline::Jacobi)
        .discount(0.5)
        .max_iterations(nz(1))
        .chunk_groups(vec![2..3, 1..2, 0..1])
        .build()
        .unwrap();

    let single = solve(&single, &mdp, false).unwrap();
    let backwards = solve(&backwards, &mdp, false).unwrap();

    assert_eq!(single.values.unwrap(), vec![0.0, 0.0, 1.0]);
    assert_eq!(backwards.values.unwrap(), vec![0.25, 0.5, 1.0]);
}

#[test]
fn test_solution_serializes() {
    let mdp = three_state_mdp();
    let config = builder(2).discount(DISCOUNT).build().unwrap();

    let solution = solve(&config, &mdp, false).unwrap();
    let json = serde_json::to_value(&solution).unwrap();

    assert_eq!(json["report"]["status"], "converged");
    assert_eq!(json["policy"], serde_json::json!([1, 1, 0]));
}
