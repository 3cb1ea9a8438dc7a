use super::TransitionErr;

/// Maximum distance from one allowed for the sum of a transition's probabilities.
pub const PROBABILITY_EPSILON: f64 = 1e-6;

/// Checks that a single transition distribution is well formed.
///
/// # Arguments
/// * `successors` - The successor state indices.
/// * `probabilities` - The probability of reaching each successor.
/// * `states` - The size of the state space.
///
/// # Returns
/// A `TransitionErr` describing the first defect found.
pub fn check_transition(
    successors: &[usize],
    probabilities: &[f64],
    states: usize,
) -> Result<(), TransitionErr> {
    if successors.len() != probabilities.len() {
        return Err(TransitionErr::LengthMismatch {
            successors: successors.len(),
            probabilities: probabilities.len(),
        });
    }

    if let Some(&successor) = successors.iter().find(|&&s| s >= states) {
        return Err(TransitionErr::SuccessorOutOfRange { successor, states });
    }

    if let Some(&p) = probabilities
        .iter()
        .find(|p| !p.is_finite() || !(0.0..=1.0).contains(*p))
    {
        return Err(TransitionErr::InvalidProbability(p));
    }

    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_EPSILON {
        return Err(TransitionErr::ProbabilitySum(sum));
    }

    Ok(())
}

/// Checks that a reward can take part in a Bellman backup.
pub fn check_reward(reward: f64) -> Result<(), TransitionErr> {
    if reward.is_finite() {
        Ok(())
    } else {
        Err(TransitionErr::NonFiniteReward(reward))
    }
}
