//! # BLAKE3 Hashing
//!
//! One-shot and streaming BLAKE3 digests.
//!
//! `Blake3Writer` implements [`std::io::Write`] so that serializers can
//! encode a value straight into the hasher without an intermediate buffer.

use std::io;

/// Length in bytes of every digest produced here.
pub const HASH_LENGTH: usize = 32;

/// BLAKE3 hash output (256-bit).
pub type Hash = [u8; HASH_LENGTH];

/// Hash data with BLAKE3 (one-shot).
pub fn blake3_hash(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}

/// Hash the concatenation of several inputs without allocating it.
///
/// `blake3_hash_many(&[a, b])` equals `blake3_hash(&[a, b].concat())`.
pub fn blake3_hash_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    *hasher.finalize().as_bytes()
}

/// Streaming hasher usable as an `io::Write` sink.
#[derive(Default)]
pub struct Blake3Writer {
    inner: blake3::Hasher,
    written: u64,
}

impl Blake3Writer {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of bytes fed into the hasher so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Finalize and return the digest.
    pub fn finalize(&self) -> Hash {
        *self.inner.finalize().as_bytes()
    }
}

impl io::Write for Blake3Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
