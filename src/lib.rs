//! A naive Brainfuck interpreter on an unbounded tape.
//!
//! This crate executes the eight classic instructions `><+-.,[]` directly
//! from a [`ProgramSource`] — either an in-memory string or an open file —
//! without compiling to bytecode or precomputing bracket jumps. Loops work
//! the way a seekable stream makes natural: entering `[` with a nonzero
//! cell saves the source position, the matching `]` seeks back to it, and
//! skipping `[` with a zero cell re-scans forward for the matching `]`.
//! That re-scanning cost is part of the execution model on purpose, not an
//! oversight.
//!
//! Features and behaviors:
//! - Tape unbounded in both directions, cells are wrapping `u8`, zeroed on
//!   first visit.
//! - Brackets are validated in one pass before anything executes;
//!   unmatched `[` and unmatched `]` are reported as distinct errors.
//! - Input `,` reads a single byte from the caller's input stream; what
//!   happens on EOF is configurable via [`EofPolicy`].
//! - Output `.` writes the current cell to the caller's output stream.
//! - Any non-instruction byte is a comment and is skipped.
//! - Benchmark mode counts executed instructions (comments excluded).
//!
//! Quick start:
//!
//! ```
//! use bfi::{evaluate, ProgramSource, RunOptions};
//!
//! // Computes 8 x 8 and prints the result byte ('@').
//! let mut source = ProgramSource::from_code("++++++++[>++++++++<-]>.");
//! let mut output = Vec::new();
//! evaluate(&mut source, &mut std::io::empty(), &mut output, RunOptions::default())
//!     .expect("program should run");
//! assert_eq!(output, [64]);
//! ```

mod engine;
mod source;
mod stack;
mod tape;

pub use engine::{check_brackets, evaluate, EofPolicy, RunOptions};
pub use source::{ProgramSource, SourcePos};
pub use tape::Tape;

/// Errors reported while validating or executing a program.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A `[` with no matching `]`; caught by validation before execution.
    #[error("unmatched opening bracket")]
    UnmatchedOpenBracket,

    /// A `]` with no matching `[`; caught by validation before execution.
    #[error("unmatched closing bracket")]
    UnmatchedCloseBracket,

    /// An underlying stream failed while seeking the program source or
    /// reading user input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `]` was dispatched with no live loop on the stack. Cannot happen
    /// for input that passed bracket validation.
    #[error("internal error: loop stack underflow")]
    LoopStackUnderflow,

    /// A forward scan for a matching `]` ran off the end of the program.
    /// Cannot happen for input that passed bracket validation.
    #[error("internal error: forward scan ran past end of program")]
    ScanPastEnd,
}
