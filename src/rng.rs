//! Cryptographically strong random source backing the random part of every Tuid.
//!
//! The source is deliberately not pluggable: the uniqueness of generated identifiers rests on the
//! unpredictability of these words.

use std::cell::RefCell;

use rand::rngs::adapter::ReseedingRng;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Core;

/// Number of bytes produced before the ChaCha core is reseeded from the OS.
const RESEED_THRESHOLD: u64 = 1024 * 64;

thread_local! {
    static ENTROPY: RefCell<EntropyPool> = RefCell::new(EntropyPool::new());
}

/// Returns the next random `u64` from the calling thread's entropy pool.
///
/// # Panics
///
/// Panics if the operating system cannot provide a seed.
pub(crate) fn next_u64() -> u64 {
    ENTROPY.with(|pool| pool.borrow_mut().next_u64())
}

/// [`ChaCha12Core`] with [`ReseedingRng`] wrapper, emulating the strategy used by
/// `rand::rngs::ThreadRng`, plus a process ID check that discards the state upon Unix forks.
#[derive(Debug)]
struct EntropyPool {
    #[cfg(unix)]
    pid: u32,
    rng: ReseedingRng<ChaCha12Core, OsRng>,
}

impl EntropyPool {
    fn new() -> Self {
        let core = ChaCha12Core::from_rng(OsRng)
            .unwrap_or_else(|err| panic!("tuid: could not seed random number generator: {err}"));
        Self {
            #[cfg(unix)]
            pid: std::process::id(),
            rng: ReseedingRng::new(core, RESEED_THRESHOLD, OsRng),
        }
    }

    fn next_u64(&mut self) -> u64 {
        #[cfg(unix)]
        if self.pid != std::process::id() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                parent = self.pid,
                child = std::process::id(),
                "process id changed, reseeding tuid entropy pool"
            );
            *self = Self::new();
        }
        self.rng.next_u64()
    }
}
