//! Bracket validation and the instruction dispatch loop.
//!
//! Execution is deliberately naive: instructions are dispatched straight
//! off the [`ProgramSource`], a skipped `[` re-scans forward for its `]`,
//! and a taken `]` seeks back to a saved position. No jump table, no
//! bytecode, no collapsing of instruction runs.

use std::io::{Read, Write};

use crate::source::ProgramSource;
use crate::stack::PosStack;
use crate::tape::Tape;
use crate::EvalError;

/// What `,` stores when the input stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    /// Store a zero (the classic default).
    #[default]
    Zero,
    /// Store 0xFF, a negative one in byte terms.
    NegOne,
    /// Leave the current cell untouched.
    NoOp,
}

/// Immutable configuration for one execution run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Behavior of `,` at end of input.
    pub eof: EofPolicy,
    /// Count executed instructions and return the total.
    pub benchmark: bool,
}

/// Verify that every `[` has a matching `]` and vice versa.
///
/// Scans from the source's current position to end of input: `[` raises a
/// nesting counter, `]` lowers it. A counter below zero means a stray `]`
/// and the scan stops there; a counter above zero at end of input means a
/// stray `[`. The source is rewound afterwards on every path, so
/// validation never consumes the program.
pub fn check_brackets(source: &mut ProgramSource) -> Result<(), EvalError> {
    let mut level: i64 = 0;
    let mut verdict = Ok(());
    while let Some(byte) = source.next_byte() {
        match byte {
            b'[' => level += 1,
            b']' => level -= 1,
            _ => {}
        }
        if level < 0 {
            verdict = Err(EvalError::UnmatchedCloseBracket);
            break;
        }
    }
    if verdict.is_ok() && level > 0 {
        verdict = Err(EvalError::UnmatchedOpenBracket);
    }
    source.rewind()?;
    verdict
}

/// Consume bytes up to and including the `]` matching a just-read `[`.
///
/// Nesting starts at 1 for the bracket already dispatched. Running out of
/// input first cannot happen after validation, but the engine guards it.
fn skip_loop(source: &mut ProgramSource) -> Result<(), EvalError> {
    let mut open: u32 = 1;
    while let Some(byte) = source.next_byte() {
        match byte {
            b'[' => open += 1,
            b']' => {
                open -= 1;
                if open == 0 {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
    Err(EvalError::ScanPastEnd)
}

/// Validate and run a program to completion.
///
/// `input` feeds `,` and `output` receives `.`. On a bracket mismatch the
/// specific kind is returned and nothing executes. Returns the executed
/// instruction count when [`RunOptions::benchmark`] is set, `None`
/// otherwise; comment bytes never count.
pub fn evaluate<R: Read, W: Write>(
    source: &mut ProgramSource,
    input: &mut R,
    output: &mut W,
    options: RunOptions,
) -> Result<Option<u64>, EvalError> {
    check_brackets(source)?;

    let mut tape = Tape::new();
    let mut loops = PosStack::new();
    let mut executed: u64 = 0;

    while let Some(byte) = source.next_byte() {
        match byte {
            b'<' => tape.move_left(),
            b'>' => tape.move_right(),
            b'+' => tape.increment(),
            b'-' => tape.decrement(),
            b',' => {
                let mut buf = [0u8; 1];
                match input.read(&mut buf)? {
                    0 => match options.eof {
                        EofPolicy::Zero => tape.write(0),
                        EofPolicy::NegOne => tape.write(0xFF),
                        EofPolicy::NoOp => {}
                    },
                    _ => tape.write(buf[0]),
                }
            }
            b'.' => output.write_all(&[tape.read()])?,
            b'[' => {
                if tape.read() == 0 {
                    skip_loop(source)?;
                } else {
                    // Saved position is just after the `[`; the matching
                    // `]` seeks back here on every iteration.
                    let here = source.capture()?;
                    loops.push(here);
                }
            }
            b']' => {
                if tape.read() != 0 {
                    let top = loops.peek()?;
                    source.restore(top)?;
                } else {
                    loops.pop()?;
                }
            }
            // Comment byte: not an instruction, not counted.
            _ => continue,
        }
        executed += 1;
    }

    Ok(options.benchmark.then_some(executed))
}
