/// A finite Markov Decision Process with `num_states` states and `num_actions`
/// actions, every action being available in every state.
///
/// The solver only ever borrows the model and reads it from several worker
/// threads at once, hence the `Sync` bound.
pub trait DiscreteMdp: Sync {
    /// Returns the amount of states in the model.
    fn num_states(&self) -> usize;

    /// Returns the amount of actions available in each state.
    fn num_actions(&self) -> usize;

    /// Should return the successors of taking `action` in `state`.
    ///
    /// # Arguments
    /// * `state` - The origin state, in `0..num_states()`.
    /// * `action` - The action taken, in `0..num_actions()`.
    ///
    /// # Returns
    /// The successor state indices and their probabilities, both slices must have the
    /// same length and the probabilities must sum to one.
    fn next_states(&self, state: usize, action: usize) -> (&[usize], &[f64]);

    /// Should return the immediate reward of taking `action` in `state`.
    ///
    /// # Arguments
    /// * `state` - The origin state, in `0..num_states()`.
    /// * `action` - The action taken, in `0..num_actions()`.
    fn reward(&self, state: usize, action: usize) -> f64;
}
