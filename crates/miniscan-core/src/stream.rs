//! Input stream model with single-byte pushback.
//!
//! Models the stdio read cursor as used by formatted input: a blocking byte
//! source plus a one-slot lookahead buffer. POSIX guarantees exactly one
//! character of pushback, and the engine's whitespace-skip and mismatch
//! handling depend on nothing more.
//!
//! Reference: POSIX.1-2024 getchar, ungetc; ISO C11 7.21.7
//!
//! Design: `CharStream` owns the pushback slot. A read either drains the
//! slot or pulls fresh input; a pushback stores into the slot and is refused
//! while the slot is occupied.

use parking_lot::Mutex;
use std::io::{self, Read};

// ---------------------------------------------------------------------------
// Byte sources
// ---------------------------------------------------------------------------

/// A blocking source of single bytes.
///
/// `None` signals end of stream. A read blocks until a byte is available or
/// the stream ends; there are no timeouts.
pub trait ByteSource {
    /// Read one byte, blocking until it arrives or the stream ends.
    fn read_byte(&mut self) -> Option<u8>;
}

/// In-memory byte source for tests, fixtures, and benchmarks.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Vec<u8>,
    pos: usize,
}

impl MemorySource {
    /// Source over an owned byte buffer.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &[u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for MemorySource {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

/// The process standard input as a byte source.
///
/// Read errors other than interruption are collapsed into end of stream;
/// the read cursor has a single end-of-input sentinel.
#[derive(Debug)]
pub struct StdinSource;

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match io::stdin().read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(_) => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Stream
// ---------------------------------------------------------------------------

/// A byte stream with a one-slot pushback buffer.
#[derive(Debug)]
pub struct CharStream<S> {
    source: S,
    pushback: Option<u8>,
}

impl<S: ByteSource> CharStream<S> {
    /// Stream over the given source with an empty pushback slot.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            pushback: None,
        }
    }

    /// Read the next byte: the pushed-back byte if present, else fresh input.
    pub fn read(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushback.take() {
            return Some(byte);
        }
        self.source.read_byte()
    }

    /// Push a byte back so the next read observes it again.
    ///
    /// Returns `false` if a byte is already pushed back; the stream
    /// guarantees exactly one byte of pushback.
    pub fn unread(&mut self, byte: u8) -> bool {
        if self.pushback.is_some() {
            return false;
        }
        self.pushback = Some(byte);
        true
    }
}

impl CharStream<MemorySource> {
    /// Stream over an in-memory buffer.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::new(MemorySource::new(data))
    }
}

// ---------------------------------------------------------------------------
// Process-wide stdin cursor
// ---------------------------------------------------------------------------

/// The process-wide standard input cursor.
///
/// One lock guards the whole cursor. Callers hold it for the duration of a
/// full interpretation so the read position and pushback slot cannot
/// interleave between callers.
static STDIN_STREAM: Mutex<CharStream<StdinSource>> = Mutex::new(CharStream::new(StdinSource));

/// Access the process-wide standard input stream.
pub fn stdin_stream() -> &'static Mutex<CharStream<StdinSource>> {
    &STDIN_STREAM
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
