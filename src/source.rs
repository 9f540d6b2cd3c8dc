//! Program bytes behind a single reading interface.
//!
//! The engine never cares whether it is running a file or a string; both
//! forms answer the same four questions: what is the next byte, go back to
//! the start, where am I, and put me back there. Position tokens are
//! opaque so the two variants can record whatever they need.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};

/// Opaque token for a read offset in a [`ProgramSource`].
///
/// Obtained from [`ProgramSource::capture`] and consumed by
/// [`ProgramSource::restore`]. Restoring resumes reading byte-for-byte
/// exactly where the capture happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos(u64);

/// A finite sequence of program bytes, read one at a time.
pub enum ProgramSource {
    /// Program text held in memory, read by index.
    Memory { data: Vec<u8>, pos: usize },
    /// Program read from an open file through a buffered reader.
    Stream(BufReader<File>),
}

impl ProgramSource {
    /// Wrap an in-memory program string.
    pub fn from_code(code: &str) -> Self {
        Self::from_bytes(code.as_bytes().to_vec())
    }

    /// Wrap an in-memory byte buffer.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        ProgramSource::Memory { data, pos: 0 }
    }

    /// Wrap an already-open file. Reading starts at the file's current
    /// offset; call [`rewind`](Self::rewind) first if it has been read.
    pub fn from_file(file: File) -> Self {
        ProgramSource::Stream(BufReader::new(file))
    }

    /// Return the next program byte and advance, or `None` at end of
    /// input. A read failure on the file variant also ends the program,
    /// matching the `fgetc` semantics being modeled.
    pub fn next_byte(&mut self) -> Option<u8> {
        match self {
            ProgramSource::Memory { data, pos } => {
                let byte = data.get(*pos).copied();
                if byte.is_some() {
                    *pos += 1;
                }
                byte
            }
            ProgramSource::Stream(reader) => {
                let mut buf = [0u8; 1];
                match reader.read(&mut buf) {
                    Ok(1) => Some(buf[0]),
                    _ => None,
                }
            }
        }
    }

    /// Reset the read cursor to the first byte.
    pub fn rewind(&mut self) -> io::Result<()> {
        match self {
            ProgramSource::Memory { pos, .. } => {
                *pos = 0;
                Ok(())
            }
            ProgramSource::Stream(reader) => reader.rewind(),
        }
    }

    /// Capture the current read offset.
    ///
    /// `stream_position` accounts for unread buffered bytes, so the token
    /// names the logical offset, not the underlying file descriptor's.
    pub fn capture(&mut self) -> io::Result<SourcePos> {
        match self {
            ProgramSource::Memory { pos, .. } => Ok(SourcePos(*pos as u64)),
            ProgramSource::Stream(reader) => Ok(SourcePos(reader.stream_position()?)),
        }
    }

    /// Move the read cursor back to a captured offset. Subsequent reads
    /// resume byte-for-byte as if no seek had occurred.
    pub fn restore(&mut self, at: SourcePos) -> io::Result<()> {
        match self {
            ProgramSource::Memory { pos, .. } => {
                *pos = at.0 as usize;
                Ok(())
            }
            ProgramSource::Stream(reader) => reader.seek(SeekFrom::Start(at.0)).map(|_| ()),
        }
    }
}
