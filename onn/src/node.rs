use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

/// A single oscillator and its preallocated state history.
///
/// `states` is row-major by time step. Row 0 holds the initial state, the
/// remaining rows stay zeroed until something steps the network.
#[derive(Debug, Clone)]
pub struct Node {
    layer: i32,
    states: Array2<f64>,
    input_sum_terms: Option<Array1<f64>>,
}

impl Node {
    /// Builds a node from one configuration row.
    ///
    /// Every element but the last is the initial state, the last element is
    /// the layer tag. The tag is truncated toward zero and saturates at the
    /// `i32` bounds, a NaN tag becomes layer 0. `Network::new` rejects such
    /// tags before building any node.
    ///
    /// # Panics
    ///
    /// Panics if `initial_state` has fewer than two elements.
    pub fn new(initial_state: ArrayView1<f64>, num_steps: usize) -> Node {
        let width = initial_state.len();
        assert!(
            width >= 2,
            "node row needs a state component and a layer tag, got {} elements",
            width
        );

        let state_dim = width - 1;
        let mut states = Array2::zeros((num_steps, state_dim));

        if num_steps > 0 {
            states
                .row_mut(0)
                .assign(&initial_state.slice(s![..state_dim]));
        }

        Node {
            layer: initial_state[state_dim] as i32,
            states,
            input_sum_terms: None,
        }
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn states(&self) -> ArrayView2<f64> {
        self.states.view()
    }

    /// # Panics
    ///
    /// Panics if the node was built with zero steps.
    pub fn initial_state(&self) -> ArrayView1<f64> {
        self.states.row(0)
    }

    pub fn state_dim(&self) -> usize {
        self.states.ncols()
    }

    pub fn num_steps(&self) -> usize {
        self.states.nrows()
    }

    /// Accumulated coupling input. Absent until a stepper fills it in.
    pub fn input_sum_terms(&self) -> Option<&Array1<f64>> {
        self.input_sum_terms.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn stores_state_without_tag() {
        let row = array![0.5, 2.0, -1.0, 3.0];
        let node = Node::new(row.view(), 4);

        assert_eq!(node.states().dim(), (4, 3));
        assert_eq!(node.initial_state(), array![0.5, 2.0, -1.0]);
        assert_eq!(node.layer(), 3);
    }

    #[test]
    fn later_rows_are_zeroed() {
        let row = array![1.0, 1.0, 0.0];
        let node = Node::new(row.view(), 5);

        for t in 1..node.num_steps() {
            assert!(node.states().row(t).iter().all(|v| *v == 0.));
        }
    }

    #[test]
    fn layer_tag_truncates() {
        assert_eq!(Node::new(array![0.0, 1.0, 2.9].view(), 1).layer(), 2);
        assert_eq!(Node::new(array![0.0, 1.0, -1.7].view(), 1).layer(), -1);
    }

    #[test]
    fn input_sum_terms_start_absent() {
        let node = Node::new(array![0.0, 1.0, 0.0].view(), 2);
        assert!(node.input_sum_terms().is_none());
    }

    #[test]
    fn zero_steps_allocates_empty_history() {
        let node = Node::new(array![0.2, 1.0, 0.0].view(), 0);
        assert_eq!(node.states().dim(), (0, 2));
    }

    #[test]
    #[should_panic]
    fn rejects_row_without_state() {
        Node::new(array![1.0].view(), 3);
    }
}
