use crate::arch::ModelState;

/// The states visited by gradient descent, from the initial guess to the last iterate.
///
/// A `Trajectory` always holds at least one state and is never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub(super) states: Vec<ModelState>,
}

impl Trajectory {
    /// Wraps the given states, returning `None` if there are none.
    pub fn new(states: Vec<ModelState>) -> Option<Self> {
        (!states.is_empty()).then_some(Self { states })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`, see `Trajectory::new`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The index of the final iterate.
    pub fn last_index(&self) -> usize {
        self.states.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ModelState> {
        self.states.get(index)
    }

    pub fn first(&self) -> &ModelState {
        &self.states[0]
    }

    pub fn last(&self) -> &ModelState {
        &self.states[self.last_index()]
    }

    /// The state at `index`, clamped to the last one.
    pub fn at(&self, index: usize) -> &ModelState {
        &self.states[index.min(self.last_index())]
    }

    /// The states visited up to and including `index`, clamped to the whole trajectory.
    pub fn visible(&self, index: usize) -> &[ModelState] {
        &self.states[..=index.min(self.last_index())]
    }

    pub fn states(&self) -> &[ModelState] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelState> {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::Params;

    fn trajectory(n: usize) -> Trajectory {
        let states = (0..n)
            .map(|i| ModelState::new(Params::new(i as f64, 0.0), 1.0))
            .collect();
        Trajectory::new(states).unwrap()
    }

    #[test]
    fn empty_states_are_rejected() {
        assert!(Trajectory::new(Vec::new()).is_none());
    }

    #[test]
    fn visible_slice_is_clamped() {
        let t = trajectory(4);
        assert_eq!(t.visible(0).len(), 1);
        assert_eq!(t.visible(2).len(), 3);
        assert_eq!(t.visible(99).len(), 4);
        assert_eq!(t.at(99).theta0, 3.0);
    }
}
