//! Step budgets and the bounded trace both traversals write into.

use crate::error::{Error, Result};
use std::ops::ControlFlow;

/// How many trace entries a traversal may emit before it stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unbounded,
    Steps(usize),
}

impl Limit {
    /// `-1` is unbounded; any other negative value is rejected.
    pub fn from_raw(raw: i64) -> Result<Self> {
        match raw {
            -1 => Ok(Self::Unbounded),
            n if n >= 0 => Ok(Self::Steps(n as usize)),
            limit => Err(Error::InvalidLimit { limit }),
        }
    }

    pub fn is_reached(self, len: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Steps(n) => len >= n,
        }
    }
}

impl TryFrom<i64> for Limit {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self> {
        Self::from_raw(raw)
    }
}

/// Ordered step log: a portal when it is entered, its reverse when the traversal backs out.
#[derive(Debug, Clone)]
pub(crate) struct Trace {
    steps: Vec<usize>,
    limit: Limit,
}

impl Trace {
    pub(crate) fn new(limit: Limit) -> Self {
        Self {
            steps: Vec::new(),
            limit,
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.limit.is_reached(self.steps.len())
    }

    /// Appends `p`; breaks once the limit is hit.
    pub(crate) fn push(&mut self, p: usize) -> ControlFlow<()> {
        self.steps.push(p);
        if self.is_full() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub(crate) fn into_steps(self) -> Vec<usize> {
        self.steps
    }
}
