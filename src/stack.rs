//! Stack of saved source positions, one per live loop.

use crate::source::SourcePos;
use crate::EvalError;

/// LIFO stack of captured positions marking "just after this `[`".
///
/// Depth always equals the nesting depth of loops entered with a nonzero
/// cell. Peeking or popping empty means the engine dispatched a `]` with
/// no live loop, which validated input rules out; it is surfaced as an
/// error rather than aborting the process.
#[derive(Debug, Default)]
pub(crate) struct PosStack {
    items: Vec<SourcePos>,
}

impl PosStack {
    pub(crate) fn new() -> Self {
        PosStack { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, pos: SourcePos) {
        self.items.push(pos);
    }

    /// The most recent saved position, without removing it.
    pub(crate) fn peek(&self) -> Result<SourcePos, EvalError> {
        self.items.last().copied().ok_or(EvalError::LoopStackUnderflow)
    }

    /// Discard the most recent saved position.
    pub(crate) fn pop(&mut self) -> Result<SourcePos, EvalError> {
        self.items.pop().ok_or(EvalError::LoopStackUnderflow)
    }
}
