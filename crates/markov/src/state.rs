//! Outcome of a single transition draw.

/// Result of drawing the next state of a chain.
///
/// States are zero-based, `0..n_states`. A finite-duration chain has one
/// extra outcome, the virtual END state, whose index in a transition row is
/// `n_states`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The chain moved to (or started in) this state.
    State(usize),
    /// The chain terminated.
    End,
}

impl Step {
    /// Interprets a drawn row index for a chain with `n_states` states.
    ///
    /// Any index at or beyond `n_states` is the END state.
    pub fn from_index(index: usize, n_states: usize) -> Self {
        if index < n_states {
            Self::State(index)
        } else {
            Self::End
        }
    }

    /// Returns the state index, or `None` for END.
    pub fn state(self) -> Option<usize> {
        match self {
            Self::State(i) => Some(i),
            Self::End => None,
        }
    }
}
