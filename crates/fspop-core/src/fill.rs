//! The deterministic fill buffer that sources every byte fspopulate writes.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{FILL_BUFFER_LEN, FILL_SEED};

/// Pseudo-random bytes generated once from a fixed seed.
///
/// The contents depend only on the length, so files created from empty are
/// byte-for-byte reproducible across runs and machines. A shorter buffer is
/// a prefix of a longer one.
#[derive(Clone)]
pub struct FillBuffer {
    bytes: Box<[u8]>,
}

impl FillBuffer {
    /// The standard 10 MiB buffer.
    pub fn new() -> Self {
        Self::with_len(FILL_BUFFER_LEN)
    }

    /// A buffer of `len` bytes. Panics if `len` is zero.
    pub fn with_len(len: usize) -> Self {
        assert!(len > 0, "fill buffer must not be empty");
        let mut bytes = vec![0u8; len].into_boxed_slice();
        ChaCha20Rng::seed_from_u64(FILL_SEED).fill_bytes(&mut bytes);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for API symmetry with [`FillBuffer::len`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for FillBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FillBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FillBuffer").field("len", &self.bytes.len()).finish()
    }
}
